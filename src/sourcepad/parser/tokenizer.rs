//! Quote-aware splitting of a command line into words.
//!
//! Whitespace separates words except inside double quotes. Quotes are
//! removed from the word text, so `d/"two words"` yields `d/two words`.
//! A word that *begins* with a quote is marked [`Token::quoted`] and is
//! never read as a prefix.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub quoted: bool,
}

impl Token {
    fn new() -> Self {
        Self {
            text: String::new(),
            quoted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnterminatedQuote;

impl fmt::Display for UnterminatedQuote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "A quoted value is missing its closing quote.")
    }
}

pub fn tokenize(input: &str) -> Result<Vec<Token>, UnterminatedQuote> {
    let mut tokens = Vec::new();
    let mut current: Option<Token> = None;
    let mut in_quotes = false;

    for ch in input.chars() {
        match ch {
            '"' => {
                current.get_or_insert_with(|| Token {
                    text: String::new(),
                    quoted: true,
                });
                in_quotes = !in_quotes;
            }
            c if c.is_whitespace() && !in_quotes => {
                if let Some(token) = current.take() {
                    tokens.push(token);
                }
            }
            c => current.get_or_insert_with(Token::new).text.push(c),
        }
    }

    if in_quotes {
        return Err(UnterminatedQuote);
    }
    if let Some(token) = current {
        tokens.push(token);
    }
    Ok(tokens)
}
