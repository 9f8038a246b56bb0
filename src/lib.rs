//! hal_words — character-class word-boundary tokenizer.
//!
//! Splits raw text into words, digit runs, punctuation runs and whitespace
//! runs, producing the token sequence a chatterbot learns from.

pub mod batch;
pub mod config;
pub mod input;
pub mod output;
pub mod reply;
pub mod tokenizer;

use std::sync::Once;

pub use batch::{tokenize_lines, tokenize_lines_parallel};
pub use config::{Config, OutputFormat};
pub use reply::Responder;
pub use tokenizer::{is_boundary, token_count, tokenize, CharClass, TokenKind, Tokenizer};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=hal_words=debug` or
/// `RUST_LOG=hal_words=trace`; logs go to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
