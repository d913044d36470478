use sg::cli::OutputFormat;
use sg::config::Config;

#[test]
fn test_explicit_path_loads_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[output]\nformat = \"json\"\n\n[tree]\nindent = 1\n").unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert_eq!(config.output.format, Some(OutputFormat::Json));
    assert_eq!(config.tree.indent, 1);
}

#[test]
fn test_explicit_missing_path_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(Some(&dir.path().join("absent.toml"))).unwrap();
    assert!(config.output.format.is_none());
}
