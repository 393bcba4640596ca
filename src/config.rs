use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::args::{Flag, ParsedArguments};
use crate::error::ConfigError;
use crate::options::Translator;

/// Environment variable consulted for the API key when neither the command
/// line nor the config file provides one.
pub const API_KEY_VAR: &str = "TRANSLATE_API_KEY";

/// Defaults read from a JSON config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub lang: Option<String>,
    pub translator: Option<Translator>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(file_path: P) -> Result<Self, ConfigError> {
        let path = file_path.as_ref();
        tracing::debug!("Reading config {}", path.display());

        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Fills flags missing from `parsed`; values already on the command line win.
    pub fn apply(&self, parsed: &mut ParsedArguments) {
        parsed.fill(Flag::Lang, self.lang.as_deref());
        parsed.fill(Flag::Translator, self.translator.map(Translator::as_str));
        parsed.fill(Flag::ApiKey, self.api_key.as_deref());
    }
}

/// Merges the optional config file and the environment into `parsed`.
pub fn merge(parsed: &mut ParsedArguments, config: Option<&PathBuf>) -> Result<(), ConfigError> {
    if let Some(path) = config {
        Config::load(path)?.apply(parsed);
    }

    if !parsed.contains(Flag::ApiKey) {
        dotenv::dotenv().ok();
        if let Some(key) = env::var(API_KEY_VAR).ok().filter(|key| !key.is_empty()) {
            tracing::debug!("Using API key from {API_KEY_VAR}");
            parsed.fill(Flag::ApiKey, Some(&key));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_fields() {
        let config =
            Config::from_json(r#"{"lang": "de", "translator": "yandex", "api_key": "abc"}"#)
                .unwrap();
        assert_eq!(
            config,
            Config {
                lang: Some("de".into()),
                translator: Some(Translator::Yandex),
                api_key: Some("abc".into()),
            }
        );
    }

    #[test]
    fn empty_object_is_valid() {
        assert_eq!(Config::from_json("{}").unwrap(), Config::default());
    }

    #[test]
    fn rejects_unknown_fields_and_translators() {
        assert!(Config::from_json(r#"{"language": "de"}"#).is_err());
        assert!(Config::from_json(r#"{"translator": "deepl"}"#).is_err());
    }

    #[test]
    fn command_line_wins_over_config() {
        let config = Config {
            lang: Some("de".into()),
            translator: Some(Translator::Bing),
            api_key: Some("from-config".into()),
        };
        let mut parsed = ParsedArguments::new()
            .with_flag("l", "fr")
            .with_positional("-");
        config.apply(&mut parsed);

        assert_eq!(parsed.get(Flag::Lang), Some("fr"));
        assert_eq!(parsed.get(Flag::Translator), Some("bing"));
        assert_eq!(parsed.get(Flag::ApiKey), Some("from-config"));
        assert_eq!(parsed.positionals(), ["-"]);
    }

    #[test]
    fn load_reports_missing_file() {
        let path = env::temp_dir().join("translate-config-that-does-not-exist.json");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_reports_malformed_json() {
        let path = env::temp_dir().join(format!("translate-config-{}.json", std::process::id()));
        fs::write(&path, "{ not json").unwrap();
        let err = Config::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Invalid config file"));
    }
}
