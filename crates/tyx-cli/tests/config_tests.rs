use crate::args::{CliArgs, OutputFormat};
use crate::config::{CONFIG_FILE_NAME, Settings, TyxConfig, find_config, load_config, resolve_config};
use clap::Parser;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_config_camel_case_fields() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        CONFIG_FILE_NAME,
        r#"{ "suites": ["pick", "omit"], "format": "json", "color": false }"#,
    );
    let config = load_config(&path).unwrap();
    assert_eq!(
        config,
        TyxConfig {
            suites: vec!["pick".into(), "omit".into()],
            format: Some(OutputFormat::Json),
            color: Some(false),
        }
    );
}

#[test]
fn test_load_config_rejects_unknown_fields() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), CONFIG_FILE_NAME, r#"{ "suite": ["pick"] }"#);
    let err = load_config(&path).unwrap_err();
    assert!(err.to_string().starts_with("failed to parse config"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let args = CliArgs::try_parse_from(["tyx", "--config", "missing.json"]).unwrap();
    let err = resolve_config(&args, temp.path()).unwrap_err();
    assert!(err.to_string().starts_with("failed to read config"));
}

#[test]
fn test_implicit_config_is_found_in_cwd() {
    let temp = TempDir::new().unwrap();
    assert_eq!(find_config(temp.path()), None);
    let args = CliArgs::try_parse_from(["tyx"]).unwrap();
    assert_eq!(resolve_config(&args, temp.path()).unwrap(), None);

    write_config(temp.path(), CONFIG_FILE_NAME, r#"{ "suites": ["first"] }"#);
    let config = resolve_config(&args, temp.path()).unwrap().unwrap();
    assert_eq!(config.suites, vec!["first"]);
    assert_eq!(config.format, None);
}

#[test]
fn test_flags_override_config() {
    let config = TyxConfig {
        suites: vec!["pick".into()],
        format: Some(OutputFormat::Json),
        color: Some(true),
    };

    let args = CliArgs::try_parse_from(["tyx"]).unwrap();
    let settings = Settings::resolve(&args, Some(&config), false);
    assert_eq!(settings.suites, vec!["pick"]);
    assert_eq!(settings.format, OutputFormat::Json);
    assert!(!settings.color, "json output is never colored");

    let args =
        CliArgs::try_parse_from(["tyx", "--suite", "omit", "--format", "text"]).unwrap();
    let settings = Settings::resolve(&args, Some(&config), false);
    assert_eq!(settings.suites, vec!["omit"]);
    assert_eq!(settings.format, OutputFormat::Text);
    assert!(settings.color);

    let args = CliArgs::try_parse_from(["tyx", "--format", "text", "--no-color"]).unwrap();
    assert!(!Settings::resolve(&args, Some(&config), true).color);
}

#[test]
fn test_color_follows_terminal_without_config() {
    let args = CliArgs::try_parse_from(["tyx"]).unwrap();
    assert!(Settings::resolve(&args, None, true).color);
    assert!(!Settings::resolve(&args, None, false).color);
    assert_eq!(Settings::resolve(&args, None, true).format, OutputFormat::Text);
}
