//! # cmdsig
//!
//! Privacy-safe command signatures for CLI usage telemetry.
//!
//! Given the raw argument vector of a command-line program and the program's
//! global flag registry, [`classify`] returns a short label such as
//! `image ls` or `ecs compose up` that says which command ran without saying
//! what it ran on.
//!
//! ## Privacy Guarantees
//!
//! - **Vocabulary only**: every reported word comes from a compiled-in list
//!   of command names; user-typed tokens are never copied into the output
//! - **No flags or values**: flags and their values are skipped, never reported
//! - **Nothing after `--`**: passthrough arguments are never read
//! - **Fail empty**: an unknown flag before the command word, or an unknown
//!   command word, yields the empty string rather than a guess
//!
//! ## Example
//!
//! ```
//! use cmdsig_core::{classify, FlagSet};
//!
//! let flags = FlagSet::builtin();
//! assert_eq!(classify(&["--debug", "image", "ls", "-q"], &flags), "image ls");
//! assert_eq!(classify(&["create", "my-container"], &flags), "create");
//! assert_eq!(classify(&["--unknown", "run"], &flags), "");
//! ```

pub mod classifier;
pub mod config;
pub mod error;
pub mod flags;
pub mod rules;
pub mod scanner;
pub mod signature;
pub mod token;

pub use classifier::{classify, classify_signature};
pub use config::{load_config_with_precedence, load_flag_set, ClassifierConfig};
pub use error::RegistryError;
pub use flags::{FlagKind, FlagLookup, FlagSet, FlagSpec};
pub use rules::Rule;
pub use signature::Signature;
