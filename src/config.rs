use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub scorer: ScorerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ScorerConfig {
    #[serde(default = "default_model_version")]
    pub model_version: String,
    /// Extra positive indicator terms appended to the built-in lexicon.
    #[serde(default)]
    pub extra_positive: Vec<String>,
    /// Extra negative indicator terms appended to the built-in lexicon.
    #[serde(default)]
    pub extra_negative: Vec<String>,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            model_version: default_model_version(),
            extra_positive: Vec::new(),
            extra_negative: Vec::new(),
        }
    }
}

fn default_model_version() -> String {
    "mock-model-v1".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.server.bind.trim().is_empty() {
        anyhow::bail!("server.bind must not be empty");
    }

    if config.scorer.model_version.trim().is_empty() {
        anyhow::bail!("scorer.model_version must not be empty");
    }

    for term in config
        .scorer
        .extra_positive
        .iter()
        .chain(&config.scorer.extra_negative)
    {
        if term.trim().is_empty() {
            anyhow::bail!("scorer indicator terms must not be empty");
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("polarity.toml");
        fs::write(&path, content).unwrap();
        (tmp, path)
    }

    #[test]
    fn test_full_config_parses() {
        let (_tmp, path) = write_config(
            r#"[server]
bind = "0.0.0.0:9000"

[scorer]
model_version = "mock-model-v2"
extra_positive = ["stellar"]
extra_negative = ["dreadful"]
"#,
        );

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.bind, "0.0.0.0:9000");
        assert_eq!(config.scorer.model_version, "mock-model-v2");
        assert_eq!(config.scorer.extra_positive, vec!["stellar"]);
        assert_eq!(config.scorer.extra_negative, vec!["dreadful"]);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let (_tmp, path) = write_config("");

        let config = load_config(&path).unwrap();
        assert_eq!(config.server.bind, "127.0.0.1:8000");
        assert_eq!(config.scorer.model_version, "mock-model-v1");
        assert!(config.scorer.extra_positive.is_empty());
    }

    #[test]
    fn test_empty_bind_rejected() {
        let (_tmp, path) = write_config("[server]\nbind = \"\"\n");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("server.bind"));
    }

    #[test]
    fn test_empty_model_version_rejected() {
        let (_tmp, path) = write_config("[scorer]\nmodel_version = \"\"\n");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("scorer.model_version"));
    }

    #[test]
    fn test_blank_indicator_term_rejected() {
        let (_tmp, path) = write_config("[scorer]\nextra_positive = [\" \"]\n");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("indicator terms"));
    }

    #[test]
    fn test_missing_file_errors_with_path() {
        let err = load_config(Path::new("/nonexistent/polarity.toml")).unwrap_err();
        assert!(err.to_string().contains("polarity.toml"));
    }
}
