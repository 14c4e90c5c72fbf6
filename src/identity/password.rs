//! Client-side password policy checked before an account is created.
//!
//! The provider applies its own (weaker) rule on top of this one; anything
//! rejected here never leaves the browser.

#[cfg(test)]
#[path = "password_test.rs"]
mod password_test;

/// Minimum number of characters in a password.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Symbols that satisfy the special-character rule.
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*(),.?\":{}|<>";

/// A single password rule, in the order rules are checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordRule {
    MinLength,
    Uppercase,
    Lowercase,
    Symbol,
}

impl PasswordRule {
    /// Human-readable reason shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Self::MinLength => "Password must be at least 8 characters long",
            Self::Uppercase => "Password must include at least one uppercase letter",
            Self::Lowercase => "Password must include at least one lowercase letter",
            Self::Symbol => "Password must include at least one special character",
        }
    }

    fn satisfied_by(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LEN,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Symbol => password.chars().any(|c| PASSWORD_SYMBOLS.contains(c)),
        }
    }
}

impl std::fmt::Display for PasswordRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

const RULES: [PasswordRule; 4] =
    [PasswordRule::MinLength, PasswordRule::Uppercase, PasswordRule::Lowercase, PasswordRule::Symbol];

/// Check `password` against the policy, returning the first violated rule.
///
/// # Errors
///
/// Returns the first [`PasswordRule`] the password does not satisfy.
pub fn validate(password: &str) -> Result<(), PasswordRule> {
    match RULES.into_iter().find(|rule| !rule.satisfied_by(password)) {
        Some(rule) => Err(rule),
        None => Ok(()),
    }
}

/// Every rule `password` violates, in check order.
pub fn violations(password: &str) -> Vec<PasswordRule> {
    RULES.into_iter().filter(|rule| !rule.satisfied_by(password)).collect()
}
