//! Error types for registry construction

use thiserror::Error;

/// Errors raised while building a [`FlagSet`](crate::flags::FlagSet)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("invalid flag name {0:?}: names must be non-empty and contain no leading dash, '=' or whitespace")]
    InvalidName(String),

    #[error("invalid short form {0:?} for flag --{1}: expected a single ASCII letter or digit")]
    InvalidShort(char, String),

    #[error("flag {flag} is already registered as a {existing} flag")]
    Conflict { flag: String, existing: &'static str },
}
