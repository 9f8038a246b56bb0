use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::{Parser, Subcommand};
use tracing::info;

use hal_words::{input, output, Config, OutputFormat, Responder, Tokenizer};

/// hal_words — split text into words, numbers, punctuation and spaces.
///
/// Boundaries fall wherever the character class changes; a single space
/// between two letters stays inside the token.
#[derive(Parser)]
#[command(name = "hal_words")]
#[command(version = "0.1.0")]
#[command(about = "Tokenize text along character-class word boundaries", long_about = None)]
struct Cli {
    /// Output format (defaults to HAL_FORMAT, then `joined`)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Separator placed between tokens in `joined` output (defaults to HAL_SEPARATOR)
    #[arg(long, global = true)]
    separator: Option<String>,

    /// Keep the original casing in emitted tokens (`--preserve-case=false`
    /// folds case even when HAL_PRESERVE_CASE is set)
    #[arg(
        long,
        global = true,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = BoolishValueParser::new()
    )]
    preserve_case: Option<bool>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Tokenize a piece of text
    ///
    /// Prompts for a line on stdin when TEXT is omitted.
    Words {
        /// The text to tokenize
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Tokenize every line of a text file
    File {
        /// Path to the UTF-8 text file
        #[arg(value_name = "FILE_PATH")]
        file_path: String,
    },
}

fn apply_overrides(cli: &Cli, mut config: Config) -> Config {
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(separator) = &cli.separator {
        config.separator = separator.clone();
    }
    if let Some(preserve_case) = cli.preserve_case {
        config.preserve_case = preserve_case;
    }
    config
}

fn prompt_for_text() -> Result<String> {
    println!("Enter text: ");
    io::stdout().flush().context("Failed to flush stdout")?;
    input::read_line(io::stdin().lock())
}

fn run_words(text: Option<String>, config: &Config) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => prompt_for_text()?,
    };

    let tokenizer = Tokenizer {
        preserve_case: config.preserve_case,
    };

    match config.format {
        OutputFormat::Joined => {
            let hal = Responder::new(tokenizer, config.separator.clone());
            println!("\nWords: ");
            println!("{}", hal.reply(&text));
        }
        format => {
            let tokens = tokenizer.tokenize(&text);
            println!("{}", output::render(&tokens, format, &config.separator)?);
        }
    }

    Ok(())
}

fn run_file(file_path: &str, config: &Config) -> Result<()> {
    let text = input::read_text(file_path)?;
    let tokenizer = Tokenizer {
        preserve_case: config.preserve_case,
    };

    let lines = hal_words::tokenize_lines_parallel(text.as_str(), &tokenizer);
    info!(
        path = file_path,
        lines = lines.len(),
        tokens = lines.iter().map(Vec::len).sum::<usize>(),
        "tokenized file"
    );

    println!("{}", output::render_all(&lines, config.format, &config.separator)?);
    Ok(())
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();
    hal_words::init_tracing();

    let cli = Cli::parse();

    let result = Config::from_env().and_then(|config| {
        let config = apply_overrides(&cli, config);
        match &cli.command {
            Commands::Words { text } => run_words(text.clone(), &config),
            Commands::File { file_path } => run_file(file_path, &config),
        }
    });

    if let Err(e) = result {
        eprintln!("\n❌ Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides(args: &[&str], env: Config) -> Config {
        let cli = Cli::try_parse_from(args).unwrap();
        apply_overrides(&cli, env)
    }

    fn env_config() -> Config {
        Config {
            separator: "|".to_string(),
            preserve_case: true,
            format: OutputFormat::Json,
        }
    }

    #[test]
    fn test_env_kept_without_flags() {
        let config = overrides(&["hal_words", "words", "hi"], env_config());
        assert_eq!(config, env_config());
    }

    #[test]
    fn test_flags_override_env() {
        let config = overrides(
            &[
                "hal_words",
                "--format",
                "lines",
                "--separator",
                " ",
                "--preserve-case=false",
                "words",
                "hi",
            ],
            env_config(),
        );

        assert_eq!(config.format, OutputFormat::Lines);
        assert_eq!(config.separator, " ");
        assert!(!config.preserve_case);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = overrides(
            &[
                "hal_words",
                "file",
                "notes.txt",
                "--format=json",
                "--separator=/",
                "--preserve-case",
            ],
            Config::default(),
        );

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.separator, "/");
        assert!(config.preserve_case);
    }

    #[test]
    fn test_bare_preserve_case_does_not_take_text() {
        let cli = Cli::try_parse_from(["hal_words", "words", "--preserve-case", "hello"]).unwrap();
        assert_eq!(cli.preserve_case, Some(true));
        match cli.command {
            Commands::Words { text } => assert_eq!(text.as_deref(), Some("hello")),
            Commands::File { .. } => panic!("expected the words command"),
        }
    }

    #[test]
    fn test_preserve_case_accepts_boolish_values() {
        let config = overrides(&["hal_words", "--preserve-case=no", "words"], env_config());
        assert!(!config.preserve_case);
    }
}
