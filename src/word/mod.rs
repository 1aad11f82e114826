use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Body of an analyze request, before normalization.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UnlearnedWord {
    pub text: Option<String>,
}

impl Display for UnlearnedWord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.text {
            Some(text) => write!(f, "UnlearnedWord {{ text: {:?} }}", text),
            None => write!(f, "UnlearnedWord {{ text: <missing> }}"),
        }
    }
}

/// A normalized word: lowercase ascii letters, non-empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Word(String);

impl Word {
    pub fn parse(raw: &str) -> Result<Word> {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return Err(anyhow!("empty word"));
        }
        if word.chars().any(char::is_whitespace) {
            return Err(anyhow!("{:?} is more than one word", word));
        }
        if let Some(c) = word.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(anyhow!("{:?} contains {:?}, only a-z allowed", word, c));
        }
        Ok(Word(word))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<UnlearnedWord> for Word {
    type Error = anyhow::Error;

    fn try_from(unlearned: UnlearnedWord) -> Result<Word> {
        match unlearned.text {
            Some(text) => Word::parse(&text),
            None => Err(anyhow!("missing text field")),
        }
    }
}
