//! Argument vector → command signature

use tracing::debug;

use crate::flags::{FlagLookup, LocalFlags};
use crate::rules::Rule;
use crate::scanner::{Scanner, Step};
use crate::signature::Signature;

/// Classify `args` (program name excluded) into a space-joined signature
///
/// Returns the empty string whenever no confident classification exists.
pub fn classify<S, F>(args: &[S], flags: &F) -> String
where
    S: AsRef<str>,
    F: FlagLookup + ?Sized,
{
    classify_signature(args, flags).to_string()
}

/// Typed form of [`classify`]
pub fn classify_signature<S, F>(args: &[S], flags: &F) -> Signature
where
    S: AsRef<str>,
    F: FlagLookup + ?Sized,
{
    let mut scanner = Scanner::new(args, flags);
    let mut signature = Signature::default();

    let word = match scanner.next_word(LocalFlags::NONE) {
        Step::Word(word) => word,
        Step::End => {
            debug!("no command word before end of arguments");
            return signature;
        }
        Step::Unknown(_) => {
            debug!("unknown flag before command word, not classifying");
            return signature;
        }
    };

    let Some((root, rule)) = Rule::for_root(word) else {
        debug!("first positional is not a known command");
        return signature;
    };

    signature.push(root);
    rule.apply(&mut scanner, &mut signature);
    debug!(rule = rule.kind(), command = %signature, "classified");
    signature
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::{FlagSet, FlagSpec};

    fn flags() -> FlagSet {
        FlagSet::new()
            .with(FlagSpec::boolean("debug", Some('d')))
            .unwrap()
            .with(FlagSpec::with_value("str", None))
            .unwrap()
    }

    #[test]
    fn test_accepts_owned_and_borrowed_args() {
        let owned: Vec<String> = vec!["image".into(), "ls".into()];
        assert_eq!(classify(&owned, &flags()), "image ls");
        assert_eq!(classify(&["-d", "run"], &flags()), "run");
    }

    #[test]
    fn test_accepts_trait_objects() {
        let registry = flags();
        let lookup: &dyn FlagLookup = &registry;
        assert_eq!(classify(&["--str", "x", "ps"], lookup), "ps");
    }

    #[test]
    fn test_empty_args() {
        let args: [&str; 0] = [];
        assert!(classify_signature(&args, &flags()).is_empty());
    }

    #[test]
    fn test_unknown_root_word() {
        assert_eq!(classify(&["my-container"], &flags()), "");
        assert_eq!(classify(&["-", "run"], &flags()), "");
    }
}
