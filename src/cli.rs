use std::path::PathBuf;

use clap::Parser;

use crate::args::ParsedArguments;

/// Translate a text file with Google, Yandex or Bing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Input file, or '-' for standard input
    pub source: Option<String>,

    /// Output file (standard output when omitted)
    pub destination: Option<String>,

    /// Target language code
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Translation service: google, yandex or bing
    #[arg(short, long, alias = "t")]
    pub translator: Option<String>,

    /// API key, required by yandex and bing
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn to_parsed(&self) -> ParsedArguments {
        let flags = [
            ("lang", &self.lang),
            ("translator", &self.translator),
            ("api-key", &self.api_key),
        ];
        let parsed = flags
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
            .fold(ParsedArguments::new(), |parsed, (name, value)| {
                parsed.with_flag(name, value)
            });

        [&self.source, &self.destination]
            .into_iter()
            .flatten()
            .fold(parsed, |parsed, token| parsed.with_positional(token.as_str()))
    }
}
