use anyhow::Result;
use datahub_client::config::DEFAULT_BASE_URL;
use datahub_client::utils::validation::Validate;
use datahub_client::{ClientConfig, ClientError};

// Environment mutation is process-wide, so the whole lifecycle runs in
// one test to keep the harness threads from racing on the variables.
#[test]
fn test_config_from_env_lifecycle() -> Result<()> {
    std::env::remove_var("API_KEY");
    std::env::remove_var("PROJECT");
    std::env::remove_var("BASE_URL");

    match ClientConfig::from_env() {
        Err(ClientError::MissingConfigError { field }) => assert_eq!(field, "API_KEY"),
        other => panic!("expected missing API_KEY, got {:?}", other),
    }

    std::env::set_var("API_KEY", "secret");
    match ClientConfig::from_env() {
        Err(ClientError::MissingConfigError { field }) => assert_eq!(field, "PROJECT"),
        other => panic!("expected missing PROJECT, got {:?}", other),
    }

    std::env::set_var("PROJECT", "publicdata");
    let config = ClientConfig::from_env()?;
    assert_eq!(config.api_key, "secret");
    assert_eq!(config.project, "publicdata");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    config.validate()?;

    let ctx = config.to_context();
    assert_eq!(ctx.headers()["api-key"], "secret");
    assert_eq!(ctx.project(), "publicdata");

    std::env::set_var("BASE_URL", "ftp://files.example.com");
    let config = ClientConfig::from_env()?;
    assert!(matches!(
        config.validate(),
        Err(ClientError::InvalidConfigValueError { .. })
    ));

    std::env::set_var("BASE_URL", "https://api.eu.example.com");
    let config = ClientConfig::from_env()?;
    config.validate()?;
    assert_eq!(config.base_url, "https://api.eu.example.com");

    std::env::remove_var("API_KEY");
    std::env::remove_var("PROJECT");
    std::env::remove_var("BASE_URL");
    Ok(())
}

#[test]
fn test_blank_values_fail_validation() {
    let config = ClientConfig {
        api_key: "  ".to_string(),
        project: "publicdata".to_string(),
        base_url: DEFAULT_BASE_URL.to_string(),
    };
    assert!(matches!(
        config.validate(),
        Err(ClientError::InvalidConfigValueError { .. })
    ));
}
