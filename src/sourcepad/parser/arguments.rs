//! Groups the words after the command word into a preamble and prefixed
//! values (`y/article`, `t/research`, ...).

use super::tokenizer::Token;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Title,
    Author,
    Type,
    Detail,
    Tag,
    Field,
}

impl Prefix {
    pub const SOURCE_FIELDS: [Prefix; 6] = [
        Prefix::Title,
        Prefix::Author,
        Prefix::Type,
        Prefix::Detail,
        Prefix::Tag,
        Prefix::Field,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Prefix::Title => "n/",
            Prefix::Author => "a/",
            Prefix::Type => "y/",
            Prefix::Detail => "d/",
            Prefix::Tag => "t/",
            Prefix::Field => "b/",
        }
    }
}

/// Preamble words plus every value given for each recognised prefix, in
/// input order.
#[derive(Debug, Default)]
pub struct ArgumentMap {
    preamble: Vec<String>,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMap {
    /// Only prefixes listed in `accepted` are recognised; anything else is
    /// ordinary text. Unprefixed words after a prefix extend its value.
    pub fn build(tokens: &[Token], accepted: &[Prefix]) -> Self {
        let mut map = ArgumentMap::default();
        let mut current: Option<Prefix> = None;

        for token in tokens {
            let prefix = (!token.quoted)
                .then(|| {
                    accepted
                        .iter()
                        .find(|p| token.text.starts_with(p.as_str()))
                })
                .flatten();

            match (prefix, current) {
                (Some(prefix), _) => {
                    let value = token.text[prefix.as_str().len()..].to_string();
                    map.values.entry(*prefix).or_default().push(value);
                    current = Some(*prefix);
                }
                (None, Some(active)) => {
                    if let Some(last) = map.values.get_mut(&active).and_then(|v| v.last_mut()) {
                        if !last.is_empty() {
                            last.push(' ');
                        }
                        last.push_str(&token.text);
                    }
                }
                (None, None) => map.preamble.push(token.text.clone()),
            }
        }

        map
    }

    pub fn preamble(&self) -> &[String] {
        &self.preamble
    }

    pub fn preamble_text(&self) -> String {
        self.preamble.join(" ")
    }

    /// The last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }
}
