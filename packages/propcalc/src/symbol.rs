use std::fmt::Display;

use strum::{EnumIter, IntoEnumIterator};

use crate::error::ParseError;

// character length of the longest operator alias
pub const MAX_OPERATOR_LENGTH: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SymbolKind {
    VariableName,
    ConstantTrue,
    ConstantFalse,
    OpenParenthesis,
    CloseParenthesis,
    Negation,
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

impl SymbolKind {
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            SymbolKind::OpenParenthesis => &["("],
            SymbolKind::CloseParenthesis => &[")"],
            SymbolKind::Negation => &["!", "~", "¬"],
            SymbolKind::Conjunction => &["&", "^", "∧"],
            SymbolKind::Disjunction => &["||", "∨"],
            SymbolKind::Implication => &["->", "→"],
            SymbolKind::Equivalence => &["<->", "↔"],
            SymbolKind::VariableName
            | SymbolKind::ConstantTrue
            | SymbolKind::ConstantFalse => &[],
        }
    }

    pub fn from_operator(text: &str) -> Option<SymbolKind> {
        SymbolKind::iter().find(|kind| kind.aliases().contains(&text))
    }

    fn from_word(word: &str) -> SymbolKind {
        // 'true' and 'false' are reserved; they never name a variable.
        match word.to_lowercase().as_str() {
            "true" => SymbolKind::ConstantTrue,
            "false" => SymbolKind::ConstantFalse,
            _ => SymbolKind::VariableName,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub text: String,
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(text: impl Into<String>, kind: SymbolKind) -> Self {
        Symbol {
            text: text.into(),
            kind,
        }
    }

    pub fn classify(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();

        if !text.is_empty() && text.chars().all(char::is_alphabetic) {
            let kind = SymbolKind::from_word(&text);
            return Ok(Symbol { text, kind });
        }

        match SymbolKind::from_operator(&text) {
            Some(kind) => Ok(Symbol { text, kind }),
            None => Err(ParseError::InvalidSymbol { text }),
        }
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

pub fn tokenize(text: &str) -> Result<Vec<Symbol>, ParseError> {
    let chars = text.chars().collect::<Vec<_>>();
    let mut symbols = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }

        if chars[i].is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            let word = chars[start..i].iter().collect::<String>();
            let kind = SymbolKind::from_word(&word);
            symbols.push(Symbol::new(word, kind));
            continue;
        }

        // Grow a candidate character by character until it matches a known
        // operator alias; the tokenizer knows nothing about the encodings
        // beyond the alias table.
        let mut candidate = String::new();
        let mut matched = None;
        while i < chars.len() {
            candidate.push(chars[i]);
            i += 1;

            if let Some(kind) = SymbolKind::from_operator(&candidate) {
                matched = Some(kind);
                break;
            }
            if candidate.chars().count() >= MAX_OPERATOR_LENGTH {
                break;
            }
        }

        match matched {
            Some(kind) => symbols.push(Symbol::new(candidate, kind)),
            None => return Err(ParseError::InvalidSymbol { text: candidate }),
        }
    }

    Ok(symbols)
}
