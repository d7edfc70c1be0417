//! The reported command label

use serde::Serialize;
use std::fmt;

/// Space-joined command words, e.g. `image ls`
///
/// Words are `&'static str` borrowed from the compiled-in vocabulary, so a
/// signature can only ever hold structural command names and never a token
/// the user typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Signature {
    words: Vec<&'static str>,
}

impl Signature {
    pub(crate) fn push(&mut self, word: &'static str) {
        self.words.push(word);
    }

    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.words.join(" "))
    }
}
