//! Flag registry
//!
//! The classifier never owns the set of flags a program understands. It asks
//! a [`FlagLookup`] whether a spelling such as `-d` or `--debug` is known and
//! whether it consumes a value. [`FlagSet`] is the owned implementation used
//! for the global registry; [`LocalFlags`] covers the small compiled-in tables
//! that individual commands add on top of it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::RegistryError;

/// Read-only flag lookup, keyed by the full spelling including dashes
pub trait FlagLookup {
    /// Whether `flag` (e.g. `--debug` or `-d`) is registered
    fn is_known(&self, flag: &str) -> bool;

    /// Whether `flag` consumes a value. Unknown flags never do.
    fn takes_value(&self, flag: &str) -> bool;
}

impl<T: FlagLookup + ?Sized> FlagLookup for &T {
    fn is_known(&self, flag: &str) -> bool {
        (**self).is_known(flag)
    }

    fn takes_value(&self, flag: &str) -> bool {
        (**self).takes_value(flag)
    }
}

/// Whether a flag is a switch or takes a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    Bool,
    Value,
}

impl FlagKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlagKind::Bool => "bool",
            FlagKind::Value => "value",
        }
    }
}

/// One flag definition: long name, optional short alias, kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagSpec {
    pub name: String,
    #[serde(default)]
    pub short: Option<char>,
    #[serde(default)]
    pub value: bool,
}

impl FlagSpec {
    pub fn boolean(name: &str, short: Option<char>) -> Self {
        Self {
            name: name.to_string(),
            short,
            value: false,
        }
    }

    pub fn with_value(name: &str, short: Option<char>) -> Self {
        Self {
            name: name.to_string(),
            short,
            value: true,
        }
    }

    pub fn kind(&self) -> FlagKind {
        if self.value {
            FlagKind::Value
        } else {
            FlagKind::Bool
        }
    }

    /// `--name`
    pub fn long_spelling(&self) -> String {
        format!("--{}", self.name)
    }

    /// `-x`, when a short alias exists
    pub fn short_spelling(&self) -> Option<String> {
        self.short.map(|c| format!("-{}", c))
    }

    fn validate(&self) -> Result<(), RegistryError> {
        let name_ok = !self.name.is_empty()
            && !self.name.starts_with('-')
            && !self.name.contains('=')
            && !self.name.chars().any(char::is_whitespace);
        if !name_ok {
            return Err(RegistryError::InvalidName(self.name.clone()));
        }

        if let Some(c) = self.short {
            if !c.is_ascii_alphanumeric() {
                return Err(RegistryError::InvalidShort(c, self.name.clone()));
            }
        }

        Ok(())
    }
}

/// Owned flag registry keyed by both short and long spellings
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    specs: Vec<FlagSpec>,
    by_spelling: HashMap<String, FlagKind>,
}

impl FlagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Global flags of the host program described by the command vocabulary
    pub fn builtin() -> Self {
        let mut set = Self::new();
        let specs = [
            FlagSpec::with_value("config", None),
            FlagSpec::with_value("context", Some('c')),
            FlagSpec::boolean("debug", Some('D')),
            FlagSpec::with_value("host", Some('H')),
            FlagSpec::with_value("log-level", Some('l')),
            FlagSpec::boolean("tls", None),
            FlagSpec::with_value("tlscacert", None),
            FlagSpec::with_value("tlscert", None),
            FlagSpec::with_value("tlskey", None),
            FlagSpec::boolean("tlsverify", None),
            FlagSpec::boolean("version", Some('v')),
            FlagSpec::boolean("help", Some('h')),
        ];
        for spec in specs {
            // The table above is known to be consistent
            let _ = set.insert(spec);
        }
        set
    }

    /// Register a flag under its long and (optional) short spelling
    ///
    /// Re-registering a spelling with the same kind is a no-op; with a
    /// different kind it is a conflict.
    pub fn insert(&mut self, spec: FlagSpec) -> Result<(), RegistryError> {
        spec.validate()?;

        let kind = spec.kind();
        let spellings: Vec<String> = std::iter::once(spec.long_spelling())
            .chain(spec.short_spelling())
            .collect();

        for spelling in &spellings {
            if let Some(existing) = self.by_spelling.get(spelling) {
                if *existing != kind {
                    return Err(RegistryError::Conflict {
                        flag: spelling.clone(),
                        existing: existing.as_str(),
                    });
                }
            }
        }

        let is_new = spellings
            .iter()
            .any(|s| !self.by_spelling.contains_key(s));
        for spelling in spellings {
            self.by_spelling.insert(spelling, kind);
        }
        if is_new {
            self.specs.push(spec);
        }

        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, spec: FlagSpec) -> Result<Self, RegistryError> {
        self.insert(spec)?;
        Ok(self)
    }

    pub fn kind_of(&self, flag: &str) -> Option<FlagKind> {
        self.by_spelling.get(flag).copied()
    }

    /// Registered specs in registration order
    pub fn iter(&self) -> impl Iterator<Item = &FlagSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl FlagLookup for FlagSet {
    fn is_known(&self, flag: &str) -> bool {
        self.by_spelling.contains_key(flag)
    }

    fn takes_value(&self, flag: &str) -> bool {
        self.kind_of(flag) == Some(FlagKind::Value)
    }
}

/// Compiled-in flag table for a single command
#[derive(Debug, Clone, Copy)]
pub struct LocalFlags(pub &'static [(&'static str, FlagKind)]);

impl LocalFlags {
    pub const NONE: LocalFlags = LocalFlags(&[]);

    fn kind_of(&self, flag: &str) -> Option<FlagKind> {
        self.0
            .iter()
            .find(|(spelling, _)| *spelling == flag)
            .map(|(_, kind)| *kind)
    }
}

impl FlagLookup for LocalFlags {
    fn is_known(&self, flag: &str) -> bool {
        self.kind_of(flag).is_some()
    }

    fn takes_value(&self, flag: &str) -> bool {
        self.kind_of(flag) == Some(FlagKind::Value)
    }
}

/// Two lookups where the first shadows the second
pub struct Chain<A, B>(pub A, pub B);

impl<A: FlagLookup, B: FlagLookup> FlagLookup for Chain<A, B> {
    fn is_known(&self, flag: &str) -> bool {
        self.0.is_known(flag) || self.1.is_known(flag)
    }

    fn takes_value(&self, flag: &str) -> bool {
        if self.0.is_known(flag) {
            self.0.takes_value(flag)
        } else {
            self.1.takes_value(flag)
        }
    }
}
