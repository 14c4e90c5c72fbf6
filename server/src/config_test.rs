use super::*;

#[test]
fn port_defaults_when_unset() {
    unsafe { std::env::remove_var("GARDENHUB_TEST_PORT_UNSET") };
    assert_eq!(env_port("GARDENHUB_TEST_PORT_UNSET"), Ok(DEFAULT_PORT));
}

#[test]
fn port_parses_trimmed_value() {
    unsafe { std::env::set_var("GARDENHUB_TEST_PORT_SET", " 8080 ") };
    assert_eq!(env_port("GARDENHUB_TEST_PORT_SET"), Ok(8080));
    unsafe { std::env::remove_var("GARDENHUB_TEST_PORT_SET") };
}

#[test]
fn port_rejects_garbage_and_zero() {
    unsafe {
        std::env::set_var("GARDENHUB_TEST_PORT_BAD", "http");
        std::env::set_var("GARDENHUB_TEST_PORT_ZERO", "0");
    }
    assert_eq!(
        env_port("GARDENHUB_TEST_PORT_BAD"),
        Err(ServerConfigError::InvalidPort { var: "GARDENHUB_TEST_PORT_BAD".into(), value: "http".into() })
    );
    assert!(matches!(env_port("GARDENHUB_TEST_PORT_ZERO"), Err(ServerConfigError::InvalidPort { .. })));
    unsafe {
        std::env::remove_var("GARDENHUB_TEST_PORT_BAD");
        std::env::remove_var("GARDENHUB_TEST_PORT_ZERO");
    }
}

#[test]
fn host_defaults_and_rejects_blank() {
    unsafe {
        std::env::remove_var("GARDENHUB_TEST_HOST_UNSET");
        std::env::set_var("GARDENHUB_TEST_HOST_BLANK", "  ");
        std::env::set_var("GARDENHUB_TEST_HOST_SET", "127.0.0.1");
    }
    assert_eq!(env_host("GARDENHUB_TEST_HOST_UNSET").as_deref(), Ok(DEFAULT_HOST));
    assert_eq!(
        env_host("GARDENHUB_TEST_HOST_BLANK"),
        Err(ServerConfigError::EmptyHost { var: "GARDENHUB_TEST_HOST_BLANK".into() })
    );
    assert_eq!(env_host("GARDENHUB_TEST_HOST_SET").as_deref(), Ok("127.0.0.1"));
    unsafe {
        std::env::remove_var("GARDENHUB_TEST_HOST_BLANK");
        std::env::remove_var("GARDENHUB_TEST_HOST_SET");
    }
}

#[test]
fn bind_addr_joins_host_and_port() {
    let cfg = ServerConfig { host: "127.0.0.1".into(), port: 4000 };
    assert_eq!(cfg.bind_addr(), "127.0.0.1:4000");
}

#[test]
fn errors_name_the_variable() {
    let err = ServerConfigError::InvalidPort { var: "PORT".into(), value: "abc".into() };
    assert_eq!(err.to_string(), "invalid PORT: 'abc' is not a TCP port");
}
