//! Client configuration baked in at build time.
//!
//! Values come from `GARDENHUB_*` environment variables read with
//! `option_env!` when the crate is compiled, so the WASM bundle carries them
//! without a runtime fetch. Parsing goes through [`AppConfig::from_lookup`] so
//! it can be exercised with an arbitrary key/value source.
//!
//! ERROR HANDLING
//! ==============
//! An invalid build configuration is logged and replaced with
//! [`AppConfig::offline`], which keeps the UI usable against an in-memory
//! identity provider.
//!
//! Sign-in always needs a bot-verification token. The hosted backend refuses
//! to start without a reCAPTCHA site key; only the memory backend may opt
//! into [`DEV_CHALLENGE_TOKEN`] through `GARDENHUB_DEV_CHALLENGE_BYPASS`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";

pub const API_URL_VAR: &str = "GARDENHUB_API_URL";
pub const IDENTITY_BACKEND_VAR: &str = "GARDENHUB_IDENTITY_BACKEND";
pub const FIREBASE_API_KEY_VAR: &str = "GARDENHUB_FIREBASE_API_KEY";
pub const GOOGLE_CLIENT_ID_VAR: &str = "GARDENHUB_GOOGLE_CLIENT_ID";
pub const RECAPTCHA_SITE_KEY_VAR: &str = "GARDENHUB_RECAPTCHA_SITE_KEY";
pub const CHALLENGE_BYPASS_VAR: &str = "GARDENHUB_DEV_CHALLENGE_BYPASS";

/// Token submitted in place of a widget response when the bypass is on.
pub const DEV_CHALLENGE_TOKEN: &str = "dev-challenge-bypass";

/// Which identity provider the app talks to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdentityBackend {
    /// Identity Toolkit REST API.
    #[default]
    Firebase,
    /// In-process accounts; nothing leaves the browser tab.
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown GARDENHUB_IDENTITY_BACKEND: {0} (expected 'firebase' or 'memory')")]
    UnknownBackend(String),
    #[error("GARDENHUB_FIREBASE_API_KEY is required for the firebase identity backend")]
    MissingFirebaseApiKey,
    #[error("GARDENHUB_RECAPTCHA_SITE_KEY is required for the firebase identity backend")]
    MissingRecaptchaSiteKey,
    #[error("GARDENHUB_DEV_CHALLENGE_BYPASS is only allowed with the memory identity backend")]
    BypassRequiresMemoryBackend,
    #[error("GARDENHUB_API_URL must be an http(s) URL, got '{0}'")]
    InvalidApiUrl(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// REST base URL without a trailing slash.
    pub api_url: String,
    pub identity_backend: IdentityBackend,
    pub firebase_api_key: Option<String>,
    pub google_client_id: Option<String>,
    /// The challenge widget is rendered only when this is set.
    pub recaptcha_site_key: Option<String>,
    /// Submit [`DEV_CHALLENGE_TOKEN`] instead of a widget response.
    pub challenge_bypass: bool,
}

impl AppConfig {
    /// Parse configuration from a key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown backend, a firebase backend
    /// without an API key or site key, a bypass outside the memory backend,
    /// or a non-HTTP API URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_url = non_blank(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }
        let api_url = api_url.trim_end_matches('/').to_owned();

        let identity_backend = parse_backend(non_blank(IDENTITY_BACKEND_VAR).as_deref())?;
        let firebase_api_key = non_blank(FIREBASE_API_KEY_VAR);
        if identity_backend == IdentityBackend::Firebase && firebase_api_key.is_none() {
            return Err(ConfigError::MissingFirebaseApiKey);
        }
        let recaptcha_site_key = non_blank(RECAPTCHA_SITE_KEY_VAR);
        if identity_backend == IdentityBackend::Firebase && recaptcha_site_key.is_none() {
            return Err(ConfigError::MissingRecaptchaSiteKey);
        }
        let challenge_bypass = matches!(
            non_blank(CHALLENGE_BYPASS_VAR).map(|v| v.to_ascii_lowercase()).as_deref(),
            Some("1" | "true")
        );
        if challenge_bypass && identity_backend != IdentityBackend::Memory {
            return Err(ConfigError::BypassRequiresMemoryBackend);
        }

        Ok(Self {
            api_url,
            identity_backend,
            firebase_api_key,
            google_client_id: non_blank(GOOGLE_CLIENT_ID_VAR),
            recaptcha_site_key,
            challenge_bypass,
        })
    }

    /// Configuration captured from the build environment, falling back to
    /// [`AppConfig::offline`] when it is invalid.
    pub fn from_build_env() -> Self {
        let result = Self::from_lookup(|key| {
            let value = match key {
                API_URL_VAR => option_env!("GARDENHUB_API_URL"),
                IDENTITY_BACKEND_VAR => option_env!("GARDENHUB_IDENTITY_BACKEND"),
                FIREBASE_API_KEY_VAR => option_env!("GARDENHUB_FIREBASE_API_KEY"),
                GOOGLE_CLIENT_ID_VAR => option_env!("GARDENHUB_GOOGLE_CLIENT_ID"),
                RECAPTCHA_SITE_KEY_VAR => option_env!("GARDENHUB_RECAPTCHA_SITE_KEY"),
                CHALLENGE_BYPASS_VAR => option_env!("GARDENHUB_DEV_CHALLENGE_BYPASS"),
                _ => None,
            };
            value.map(str::to_owned)
        });
        match result {
            Ok(config) => config,
            Err(e) => {
                log::error!("config: {e}; falling back to offline configuration");
                Self::offline()
            }
        }
    }

    /// Local-only configuration: default API URL and in-memory identity. No
    /// widget and no bypass, so sign-in fails with `ChallengeNotCompleted`.
    pub fn offline() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            identity_backend: IdentityBackend::Memory,
            firebase_api_key: None,
            google_client_id: None,
            recaptcha_site_key: None,
            challenge_bypass: false,
        }
    }

    /// Whether the challenge widget is rendered.
    pub fn challenge_widget_enabled(&self) -> bool {
        self.recaptcha_site_key.is_some()
    }
}

fn parse_backend(raw: Option<&str>) -> Result<IdentityBackend, ConfigError> {
    match raw.map(str::to_ascii_lowercase).as_deref() {
        None | Some("firebase") => Ok(IdentityBackend::Firebase),
        Some("memory") => Ok(IdentityBackend::Memory),
        Some(other) => Err(ConfigError::UnknownBackend(other.to_owned())),
    }
}
