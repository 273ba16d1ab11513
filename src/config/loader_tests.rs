//! Tests for config loading and the precedence chain.

use super::*;
use serial_test::serial;
use std::fs;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("taiview_loader_test_{name}.toml"));
    fs::write(&path, contents).unwrap();
    path
}

// ===== load_config_file =====

#[test]
fn missing_file_is_not_an_error() {
    let path = std::env::temp_dir().join("taiview_loader_test_definitely_missing.toml");
    let _ = fs::remove_file(&path);
    assert_eq!(load_config_file(path).unwrap(), None);
}

#[test]
fn loads_all_fields() {
    let path = temp_config(
        "all_fields",
        r#"
lang = "en"
log_file_path = "/tmp/taiview-test.log"
"#,
    );
    let config = load_config_file(&path).unwrap().unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(config.lang.as_deref(), Some("en"));
    assert_eq!(
        config.log_file_path,
        Some(PathBuf::from("/tmp/taiview-test.log"))
    );
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let path = temp_config("invalid", "lang = [broken");
    let err = load_config_file(&path).unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("Invalid TOML"));
}

#[test]
fn unknown_keys_are_rejected() {
    let path = temp_config("unknown_keys", "theme = \"dark\"");
    let err = load_config_file(&path).unwrap_err();
    let _ = fs::remove_file(&path);

    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn keybindings_table_is_accepted_but_unused() {
    let path = temp_config(
        "keybindings",
        r#"
[keybindings]
quit = "x"
"#,
    );
    let config = load_config_file(&path).unwrap().unwrap();
    let _ = fs::remove_file(&path);

    assert!(config.keybindings.is_some());
}

// ===== merge_config =====

#[test]
fn merge_without_file_yields_defaults() {
    let resolved = merge_config(None);
    assert_eq!(resolved, ResolvedConfig::default());
    assert_eq!(resolved.lang, "zh-tw");
}

#[test]
fn merge_prefers_file_values() {
    let config_file = ConfigFile {
        lang: Some("ja".to_string()),
        log_file_path: None,
        keybindings: None,
    };
    let resolved = merge_config(Some(config_file));
    assert_eq!(resolved.lang, "ja");
    assert_eq!(resolved.log_file_path, default_log_path());
}

// ===== Env and CLI overrides =====

#[test]
#[serial(taiview_env)]
fn env_override_applies_lang() {
    std::env::set_var("TAIVIEW_LANG", "ko");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    std::env::remove_var("TAIVIEW_LANG");

    assert_eq!(resolved.lang, "ko");
}

#[test]
#[serial(taiview_env)]
fn env_override_is_noop_when_unset() {
    std::env::remove_var("TAIVIEW_LANG");
    let resolved = apply_env_overrides(ResolvedConfig::default());
    assert_eq!(resolved.lang, "zh-tw");
}

#[test]
fn cli_override_beats_everything() {
    let base = ResolvedConfig {
        lang: "ja".to_string(),
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(base, Some("en".to_string()));
    assert_eq!(resolved.lang, "en");
}

#[test]
fn cli_override_absent_keeps_previous_stage() {
    let base = ResolvedConfig {
        lang: "ja".to_string(),
        ..ResolvedConfig::default()
    };
    let resolved = apply_cli_overrides(base, None);
    assert_eq!(resolved.lang, "ja");
}

#[test]
#[serial(taiview_env)]
fn full_precedence_chain() {
    let path = temp_config("precedence", "lang = \"ja\"");
    let file = load_config_file(&path).unwrap();
    let _ = fs::remove_file(&path);

    let merged = merge_config(file);
    assert_eq!(merged.lang, "ja", "file beats defaults");

    std::env::set_var("TAIVIEW_LANG", "ko");
    let with_env = apply_env_overrides(merged);
    std::env::remove_var("TAIVIEW_LANG");
    assert_eq!(with_env.lang, "ko", "env beats file");

    let with_cli = apply_cli_overrides(with_env, Some("en".to_string()));
    assert_eq!(with_cli.lang, "en", "CLI beats env");
}

// ===== Default paths =====

#[test]
fn default_log_path_ends_with_taiview_log() {
    let path = default_log_path();
    assert!(path.to_string_lossy().ends_with("taiview.log"));
}

#[test]
fn default_config_path_mentions_taiview() {
    if let Some(path) = default_config_path() {
        assert!(path.to_string_lossy().contains("taiview"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
