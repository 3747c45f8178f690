//! Default configuration values

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "wneud.yaml";

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "wneud.toml";

/// Alternative configuration file name
pub const ALT_CONFIG_FILE: &str = ".wneud.yaml";

/// Default directory holding news fragments
pub const DEFAULT_FRAGMENTS_DIR: &str = "changes";

/// Repository used for issue links when nothing else is configured
pub const DEFAULT_REPOSITORY: &str = "example/repo";

/// Version shown in the changelog title
pub const DEFAULT_VERSION: &str = "Unreleased";

/// Default output format
pub const DEFAULT_FORMAT: &str = "rst";

/// Output formats understood by the changelog renderer
pub const KNOWN_FORMATS: &[&str] = &["rst", "markdown", "md"];

/// Get list of config file names to search for
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_YAML,
        DEFAULT_CONFIG_TOML,
        ALT_CONFIG_FILE,
        ".wneud.toml",
    ]
}

/// Default configuration template
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# wneud configuration

changelog:
  # Directory holding {issue}.{type}.rst news fragments
  directory: changes
  # owner/name used to build issue links; GITHUB_REPOSITORY overrides this
  repository: example/repo
  version: Unreleased
  format: rst
"#;

/// Default configuration template (TOML)
pub const DEFAULT_CONFIG_TOML_TEMPLATE: &str = r#"# wneud configuration

[changelog]
directory = "changes"
repository = "example/repo"
version = "Unreleased"
format = "rst"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_templates_parse_to_defaults() {
        let yaml: Config = serde_yaml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        let toml: Config = toml::from_str(DEFAULT_CONFIG_TOML_TEMPLATE).unwrap();
        assert_eq!(yaml.changelog.repository, DEFAULT_REPOSITORY);
        assert_eq!(toml.changelog.format, DEFAULT_FORMAT);
    }
}
