//! Integration tests for the auth and target commands' configuration
//! handling. Lookups that would hit the network are not exercised here;
//! these tests cover the config read/write cycle and local prerequisites.

use strato::cli::{Commands, RunContext};
use strato::config::ConfigLoader;
use strato::error::CommandError;
use tempfile::TempDir;

fn seed_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[api]\nurl = \"https://api.example.com\"\n").unwrap();
    path
}

#[test]
fn test_auth_stores_credentials() {
    let dir = TempDir::new().unwrap();
    let path = seed_config(&dir);

    let mut context = RunContext::new(Some(path.clone())).unwrap();
    context
        .execute(&Commands::Auth {
            username: "admin".to_string(),
            token: "secret".to_string(),
        })
        .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.auth.username.as_deref(), Some("admin"));
    assert_eq!(config.auth.token.as_deref(), Some("secret"));
    assert_eq!(
        config.api.url.as_deref(),
        Some("https://api.example.com"),
        "existing settings survive the rewrite"
    );
}

#[test]
fn test_target_show_without_flags_succeeds() {
    let dir = TempDir::new().unwrap();
    let path = seed_config(&dir);

    let mut context = RunContext::new(Some(path)).unwrap();
    context
        .execute(&Commands::Target {
            org: None,
            space: None,
        })
        .unwrap();
}

#[test]
fn test_target_space_requires_targeted_org() {
    let dir = TempDir::new().unwrap();
    let path = seed_config(&dir);

    let mut context = RunContext::new(Some(path.clone())).unwrap();
    let result = context.execute(&Commands::Target {
        org: None,
        space: Some("dev".to_string()),
    });

    assert!(matches!(result, Err(CommandError::NoOrganizationTargeted)));

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert!(config.target.space.is_none(), "failed targeting writes nothing");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("does-not-exist.toml");
    assert!(RunContext::new(Some(path)).is_err());
}
