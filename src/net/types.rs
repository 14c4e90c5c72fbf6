//! Wire types for the tips REST API.
//!
//! DESIGN
//! ======
//! Field names follow the API's camelCase JSON (`_id`, `plantType`,
//! `totalLiked`). Enumerated values deserialize leniently: the API is shared
//! with other clients, and one unexpected value should not drop a whole list.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Tip categories offered by the share and update forms.
pub const CATEGORIES: [&str; 8] = [
    "Plant Care",
    "Composting",
    "Vertical Gardening",
    "Hydroponics",
    "Balcony Gardens",
    "Indoor Gardening",
    "Pest Control",
    "Soil Management",
];

/// How hard a tip is to follow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }

    /// Case-insensitive parse; `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str().eq_ignore_ascii_case(raw.trim()))
    }

    /// Badge modifier class for the difficulty pill.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Easy => "badge--easy",
            Self::Medium => "badge--medium",
            Self::Hard => "badge--hard",
        }
    }
}

impl<'de> Deserialize<'de> for Difficulty {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or_default())
    }
}

/// Whether a tip is listed publicly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Availability {
    #[default]
    Public,
    Hidden,
}

impl Availability {
    pub const ALL: [Self; 2] = [Self::Public, Self::Hidden];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Hidden => "Hidden",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

impl<'de> Deserialize<'de> for Availability {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw).unwrap_or_default())
    }
}

/// A gardening tip as stored by the API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub plant_type: String,
    #[serde(default)]
    pub difficulty_level: Difficulty,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_name: String,
    /// Like counter; missing or `null` counts as zero.
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_liked: u64,
    /// ISO-8601 creation time, when the API reports one.
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Tip {
    /// Calendar date part of `created_at` (`YYYY-MM-DD`), if present.
    pub fn created_date(&self) -> Option<&str> {
        self.created_at.as_deref().map(|ts| ts.split_once('T').map_or(ts, |(date, _)| date))
    }
}

/// Body for `POST /api/tips` and `PUT /api/tips/:id`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TipDraft {
    pub title: String,
    pub plant_type: String,
    pub difficulty_level: Difficulty,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub availability: Availability,
    pub user_email: String,
    pub user_name: String,
}

impl Default for TipDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            plant_type: String::new(),
            difficulty_level: Difficulty::Easy,
            description: String::new(),
            image_url: String::new(),
            category: CATEGORIES[0].to_owned(),
            availability: Availability::Public,
            user_email: String::new(),
            user_name: String::new(),
        }
    }
}

impl From<&Tip> for TipDraft {
    fn from(tip: &Tip) -> Self {
        Self {
            title: tip.title.clone(),
            plant_type: tip.plant_type.clone(),
            difficulty_level: tip.difficulty_level,
            description: tip.description.clone(),
            image_url: tip.image_url.clone(),
            category: tip.category.clone(),
            availability: tip.availability,
            user_email: tip.user_email.clone(),
            user_name: tip.user_name.clone(),
        }
    }
}

impl TipDraft {
    /// Name of the first required field that is blank, if any.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("Title", &self.title),
            ("Plant Type/Topic", &self.plant_type),
            ("Category", &self.category),
            ("Description", &self.description),
            ("Image URL", &self.image_url),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }
}

/// A community member profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gardener {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub age: u64,
    #[serde(default)]
    pub gender: String,
    /// `"Active"` or `"Inactive"`.
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub bio: String,
    /// Free text such as `"5 years"`; some records store a bare number.
    #[serde(default, deserialize_with = "deserialize_text")]
    pub experience: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    pub total_shared_tips: u64,
}

impl Gardener {
    pub fn is_active(&self) -> bool {
        self.status.eq_ignore_ascii_case("active")
    }
}

/// Accept integers, integral floats, numeric strings, or `null` as a count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn deserialize_count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Some(serde_json::Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

/// Accept a string or a number as display text; `null` becomes empty.
fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => s,
        Some(serde_json::Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}
