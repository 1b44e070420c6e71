//! Integration tests for tool configuration layering

use kubec::config::ConfigLoader;
use kubec::error::KubecError;
use std::ffi::OsStr;
use std::fs;
use tempfile::TempDir;

use crate::integration::with_env;

fn write_user_config(config_home: &std::path::Path, contents: &str) {
    let dir = config_home.join("kubec");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_defaults_without_user_file() {
    let temp = TempDir::new().unwrap();

    let config = with_env(
        &[
            ("XDG_CONFIG_HOME", Some(temp.path().as_os_str())),
            ("KUBEC_UI__PAGE_SIZE", None),
            ("KUBEC_LOGGING__ENABLED", None),
        ],
        ConfigLoader::load,
    )
    .unwrap();

    assert!(!config.logging.enabled);
    assert!(config.ui.color);
    assert_eq!(config.ui.page_size, 15);
}

#[test]
fn test_xdg_config_file_is_read() {
    let temp = TempDir::new().unwrap();
    write_user_config(
        temp.path(),
        r#"
[logging]
enabled = true
level = "debug"

[ui]
color = false
page_size = 8
"#,
    );

    let config = with_env(
        &[
            ("XDG_CONFIG_HOME", Some(temp.path().as_os_str())),
            ("KUBEC_UI__PAGE_SIZE", None),
            ("KUBEC_LOGGING__ENABLED", None),
        ],
        || {
            assert_eq!(
                ConfigLoader::xdg_config_path().unwrap(),
                temp.path().join("kubec").join("config.toml")
            );
            ConfigLoader::load()
        },
    )
    .unwrap();

    assert!(config.logging.enabled);
    assert_eq!(config.logging.level, "debug");
    assert!(!config.ui.color);
    assert_eq!(config.ui.page_size, 8);
}

#[test]
fn test_environment_overrides_file() {
    let temp = TempDir::new().unwrap();
    write_user_config(temp.path(), "[ui]\npage_size = 8\n");

    let config = with_env(
        &[
            ("XDG_CONFIG_HOME", Some(temp.path().as_os_str())),
            ("KUBEC_UI__PAGE_SIZE", Some(OsStr::new("4"))),
            ("KUBEC_LOGGING__ENABLED", None),
        ],
        ConfigLoader::load,
    )
    .unwrap();

    assert_eq!(config.ui.page_size, 4);
}

#[test]
fn test_invalid_user_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_user_config(temp.path(), "[ui]\npage_size = 0\n");

    let result = with_env(
        &[
            ("XDG_CONFIG_HOME", Some(temp.path().as_os_str())),
            ("KUBEC_UI__PAGE_SIZE", None),
        ],
        ConfigLoader::load,
    );

    match result {
        Err(KubecError::ConfigError(msg)) => assert!(msg.contains("page_size"), "{}", msg),
        other => panic!("expected validation failure, got {:?}", other),
    }
}

#[test]
fn test_malformed_user_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    write_user_config(temp.path(), "[ui\npage_size = ");

    let result = with_env(
        &[("XDG_CONFIG_HOME", Some(temp.path().as_os_str()))],
        ConfigLoader::load,
    );

    assert!(matches!(result, Err(KubecError::ConfigError(_))));
}
