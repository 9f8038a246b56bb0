use crate::tokenizer::Tokenizer;

/// Turns user input into a reply string.
///
/// Echoes the token sequence back joined by `separator`. Learning and
/// reply generation would slot in between tokenizing and joining.
#[derive(Debug, Clone, Default)]
pub struct Responder {
    pub tokenizer: Tokenizer,
    pub separator: String,
}

impl Responder {
    pub fn new(tokenizer: Tokenizer, separator: impl Into<String>) -> Self {
        Responder {
            tokenizer,
            separator: separator.into(),
        }
    }

    pub fn reply(&self, input: &str) -> String {
        self.tokenizer.tokenize(input).join(&self.separator)
    }
}
