use startpage::config::Configuration;
use std::path::PathBuf;

#[test]
fn parse_kebab_case_config() {
    let yaml = r#"
sites-path: "data/sites.json"
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.sites_path, PathBuf::from("data/sites.json"));
    assert_eq!(
        cfg.search_engines_path,
        PathBuf::from("data/search-engines.json")
    );
    assert_eq!(cfg.output_path, PathBuf::from("index.html"));
    assert_eq!(cfg.page_title, "Start Page");
    assert_eq!(cfg.footer_text, None);
    assert_eq!(cfg.max_concurrent_samples, 8);
    cfg.validate().unwrap();
}

#[test]
fn parse_full_config() {
    let yaml = r#"
sites-path: "sites.json"
search-engines-path: "engines.json"
output-path: "out/index.html"
page-title: "My Links"
footer-text: "hello"
max-concurrent-samples: 2
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(cfg.search_engines_path, PathBuf::from("engines.json"));
    assert_eq!(cfg.output_path, PathBuf::from("out/index.html"));
    assert_eq!(cfg.page_title, "My Links");
    assert_eq!(cfg.footer_text.as_deref(), Some("hello"));
    assert_eq!(cfg.max_concurrent_samples, 2);
}

#[test]
fn missing_sites_path_is_an_error() {
    let yaml = r#"
page-title: "My Links"
"#;
    assert!(serde_yaml::from_str::<Configuration>(yaml).is_err());
}

#[test]
fn zero_sample_cap_fails_validation() {
    let yaml = r#"
sites-path: "sites.json"
max-concurrent-samples: 0
"#;
    let cfg: Configuration = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.validate().is_err());
}

#[test]
fn from_yaml_file_reads_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "sites-path: data/sites.json\n").unwrap();
    let cfg = startpage::config::from_yaml_file(&path).unwrap();
    assert_eq!(cfg.sites_path, PathBuf::from("data/sites.json"));
}
