use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::args::{Flag, ParsedArguments};
use crate::error::OptionsError;

/// Token that selects standard input as the source.
const STDIN_TOKEN: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Input {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Input::Stdin => f.write_str("<stdin>"),
            Input::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stdout => f.write_str("<stdout>"),
            Output::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Translator {
    #[default]
    Google,
    Yandex,
    Bing,
}

impl Translator {
    pub fn as_str(self) -> &'static str {
        match self {
            Translator::Google => "google",
            Translator::Yandex => "yandex",
            Translator::Bing => "bing",
        }
    }

    pub fn requires_api_key(self) -> bool {
        !matches!(self, Translator::Google)
    }
}

impl fmt::Display for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Translator {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "google" => Ok(Translator::Google),
            "yandex" => Ok(Translator::Yandex),
            "bing" => Ok(Translator::Bing),
            other => Err(OptionsError::InvalidTranslator(other.to_string())),
        }
    }
}

/// Validated configuration for a single translation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    source: Input,
    destination: Output,
    lang: String,
    api: Translator,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<String>,
}

impl ResolvedOptions {
    pub fn source(&self) -> &Input {
        &self.source
    }

    pub fn destination(&self) -> &Output {
        &self.destination
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn api(&self) -> Translator {
        self.api
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}

pub fn resolve(parsed: &ParsedArguments) -> Result<ResolvedOptions, OptionsError> {
    let mut positionals = parsed.positionals().iter();

    let source = match positionals.next() {
        Some(token) if token == STDIN_TOKEN => Input::Stdin,
        Some(token) => Input::File(PathBuf::from(token)),
        None => return Err(OptionsError::MissingSource),
    };
    let destination = match positionals.next() {
        Some(token) => Output::File(PathBuf::from(token)),
        None => Output::Stdout,
    };
    tracing::trace!("source {source}, destination {destination}");

    let lang = parsed
        .get(Flag::Lang)
        .ok_or(OptionsError::MissingLanguage)?
        .to_string();

    let api = match parsed.get(Flag::Translator) {
        Some(name) => name.parse()?,
        None => Translator::default(),
    };
    let api_key = parsed.get(Flag::ApiKey).map(str::to_string);

    if api.requires_api_key() && api_key.is_none() {
        return Err(OptionsError::RequiredApiKey(api));
    }

    tracing::debug!(
        "Resolved {} translation to '{}' (api key {})",
        api,
        lang,
        if api_key.is_some() { "set" } else { "unset" }
    );

    Ok(ResolvedOptions {
        source,
        destination,
        lang,
        api,
        api_key,
    })
}
