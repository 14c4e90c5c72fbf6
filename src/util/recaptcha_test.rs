use super::*;

use crate::config::IdentityBackend;

#[test]
fn no_widget_yields_empty_token() {
    assert_eq!(challenge_token(&AppConfig::offline(), None), "");
}

#[test]
fn bypass_yields_development_token() {
    let config = AppConfig { challenge_bypass: true, ..AppConfig::offline() };
    assert_eq!(config.identity_backend, IdentityBackend::Memory);
    assert_eq!(challenge_token(&config, None), DEV_CHALLENGE_TOKEN);
}
