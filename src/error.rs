use std::path::PathBuf;

use thiserror::Error;

use crate::options::Translator;

/// Validation failures raised while resolving command-line options.
///
/// Every variant is caused by user input and is reported verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("No source specified. Pass a file name, or '-' to read from standard input.")]
    MissingSource,

    #[error("No target language specified. Use -l or --lang.")]
    MissingLanguage,

    #[error("Invalid translator '{0}'. Expected one of: google, yandex, bing.")]
    InvalidTranslator(String),

    #[error("The {0} translator requires an API key. Use -k or --api-key.")]
    RequiredApiKey(Translator),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
