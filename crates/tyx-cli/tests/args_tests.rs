use crate::args::{CliArgs, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let args = CliArgs::try_parse_from(["tyx"]).unwrap();
    assert!(args.suites.is_empty());
    assert_eq!(args.format, None);
    assert_eq!(args.config, None);
    assert!(!args.list);
    assert!(!args.no_color);
}

#[test]
fn test_repeated_suite_flags_keep_order() {
    let args =
        CliArgs::try_parse_from(["tyx", "--suite", "pick", "-s", "awaited", "--suite", "first"])
            .unwrap();
    assert_eq!(args.suites, vec!["pick", "awaited", "first"]);
}

#[test]
fn test_format_is_case_insensitive() {
    let args = CliArgs::try_parse_from(["tyx", "--format", "JSON"]).unwrap();
    assert_eq!(args.format, Some(OutputFormat::Json));
    assert!(CliArgs::try_parse_from(["tyx", "--format", "yaml"]).is_err());
}

#[test]
fn test_config_list_and_color_flags() {
    let args =
        CliArgs::try_parse_from(["tyx", "-c", "conf/tyx.json", "--list", "--no-color"]).unwrap();
    assert_eq!(args.config, Some(PathBuf::from("conf/tyx.json")));
    assert!(args.list);
    assert!(args.no_color);
}
