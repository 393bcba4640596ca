use std::collections::HashMap;

/// Flags understood by the option resolver, independent of spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Lang,
    Translator,
    ApiKey,
}

/// Raw flag names and the flag they stand for. Earlier entries win when
/// more than one spelling of the same flag is present.
const ALIASES: &[(&str, Flag)] = &[
    ("l", Flag::Lang),
    ("lang", Flag::Lang),
    ("t", Flag::Translator),
    ("translator", Flag::Translator),
    ("k", Flag::ApiKey),
    ("api-key", Flag::ApiKey),
];

impl Flag {
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |(_, flag)| *flag == self)
            .map(|(name, _)| *name)
    }

    /// Long spelling, used when flags are filled in from outside the command line.
    pub fn long_name(self) -> &'static str {
        match self {
            Flag::Lang => "lang",
            Flag::Translator => "translator",
            Flag::ApiKey => "api-key",
        }
    }
}

/// Generic parsed command line: named flag values plus positional tokens in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    flags: HashMap<String, String>,
    positionals: Vec<String>,
}

impl ParsedArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.flags.insert(name.into(), value.into());
        self
    }

    pub fn with_positional(mut self, token: impl Into<String>) -> Self {
        self.positionals.push(token.into());
        self
    }

    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Value of `flag` under any of its spellings.
    pub fn get(&self, flag: Flag) -> Option<&str> {
        flag.aliases()
            .find_map(|name| self.flags.get(name))
            .map(String::as_str)
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.get(flag).is_some()
    }

    /// Sets `flag` unless some spelling of it is already present.
    pub fn fill(&mut self, flag: Flag, value: Option<&str>) {
        if let Some(value) = value {
            if !self.contains(flag) {
                self.flags
                    .insert(flag.long_name().to_string(), value.to_string());
            }
        }
    }
}
