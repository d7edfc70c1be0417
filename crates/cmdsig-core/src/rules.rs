//! Per-root classification rules and the command vocabulary
//!
//! Every root command maps to one [`Rule`]. The rule decides which of the
//! positionals after the root are structural (fixed vocabulary) and which are
//! user data (names, paths, image references, hostnames). Only vocabulary
//! words are ever pushed into a [`Signature`].

use tracing::debug;

use crate::flags::{FlagKind, FlagLookup, LocalFlags};
use crate::scanner::{Scanner, Step};
use crate::signature::Signature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Single-word command; later positionals are arguments (`create <name>`)
    Leaf,
    /// `<resource> <action>` where the action comes from this list
    Management(&'static [&'static str]),
    /// `context <action>`, plus a whitelisted backend after `context create`
    Context,
    /// `login [azure]`
    Login,
    /// `ecs setup`, `ecs compose <action>`
    Ecs,
    /// `scan`, `scan auth`, `scan version`
    Scan,
}

const BUILDER: &[&str] = &["build", "prune"];
const CHECKPOINT: &[&str] = &["create", "ls", "rm"];
const COMPOSE: &[&str] = &[
    "build", "config", "convert", "create", "down", "events", "exec", "images", "kill", "logs",
    "ls", "pause", "port", "ps", "pull", "push", "restart", "rm", "run", "start", "stop", "top",
    "unpause", "up", "version",
];
const CONFIG: &[&str] = &["create", "inspect", "ls", "rm"];
const CONTAINER: &[&str] = &[
    "attach", "commit", "cp", "create", "diff", "exec", "export", "inspect", "kill", "logs", "ls",
    "pause", "port", "prune", "rename", "restart", "rm", "run", "start", "stats", "stop", "top",
    "unpause", "update", "wait",
];
const IMAGE: &[&str] = &[
    "build", "history", "import", "inspect", "load", "ls", "prune", "pull", "push", "rm", "save",
    "tag",
];
const MANIFEST: &[&str] = &["annotate", "create", "inspect", "push", "rm"];
const NETWORK: &[&str] = &["connect", "create", "disconnect", "inspect", "ls", "prune", "rm"];
const NODE: &[&str] = &["demote", "inspect", "ls", "promote", "ps", "rm", "update"];
const PLUGIN: &[&str] = &[
    "create", "disable", "enable", "inspect", "install", "ls", "push", "rm", "set", "upgrade",
];
const SECRET: &[&str] = &["create", "inspect", "ls", "rm"];
const SERVICE: &[&str] = &[
    "create", "inspect", "logs", "ls", "ps", "rm", "rollback", "scale", "update",
];
const STACK: &[&str] = &["deploy", "ls", "ps", "rm", "services"];
const SWARM: &[&str] = &[
    "ca", "init", "join", "join-token", "leave", "unlock", "unlock-key", "update",
];
const SYSTEM: &[&str] = &["df", "events", "info", "prune"];
const TRUST: &[&str] = &["inspect", "key", "revoke", "sign", "signer"];
const VOLUME: &[&str] = &["create", "inspect", "ls", "prune", "rm"];

const CONTEXT_ACTIONS: &[&str] = &[
    "create", "export", "import", "inspect", "list", "ls", "rm", "show", "update", "use",
];
const CONTEXT_BACKENDS: &[&str] = &["aci", "ecs", "kube", "local"];
const CONTEXT_CREATE_FLAGS: LocalFlags = LocalFlags(&[
    ("--from", FlagKind::Value),
    ("--description", FlagKind::Value),
]);

const LOGIN_PROVIDERS: &[&str] = &["azure"];
const LOGIN_FLAGS: LocalFlags = LocalFlags(&[
    ("-u", FlagKind::Value),
    ("--username", FlagKind::Value),
    ("-p", FlagKind::Value),
    ("--password", FlagKind::Value),
    ("--password-stdin", FlagKind::Bool),
    ("--tenant-id", FlagKind::Value),
    ("--cloud-name", FlagKind::Value),
]);

const ECS_COMMANDS: &[&str] = &["compose", "setup", "version"];
const ECS_COMPOSE_ACTIONS: &[&str] = &[
    "up", "down", "ps", "logs", "convert", "config", "build", "push", "pull", "start", "stop",
    "restart", "rm", "run", "exec",
];
const ECS_COMPOSE_FLAGS: LocalFlags = LocalFlags(&[
    ("-f", FlagKind::Value),
    ("--file", FlagKind::Value),
    ("-n", FlagKind::Value),
    ("--project-name", FlagKind::Value),
    ("--env-file", FlagKind::Value),
    ("--workdir", FlagKind::Value),
]);

/// (marker flag, reported word)
const SCAN_MODES: &[(&str, &str)] = &[("--auth", "auth"), ("--version", "version")];

const ROOTS: &[(&str, Rule)] = &[
    ("attach", Rule::Leaf),
    ("build", Rule::Leaf),
    ("builder", Rule::Management(BUILDER)),
    ("checkpoint", Rule::Management(CHECKPOINT)),
    ("commit", Rule::Leaf),
    ("compose", Rule::Management(COMPOSE)),
    ("config", Rule::Management(CONFIG)),
    ("container", Rule::Management(CONTAINER)),
    ("context", Rule::Context),
    ("cp", Rule::Leaf),
    ("create", Rule::Leaf),
    ("diff", Rule::Leaf),
    ("ecs", Rule::Ecs),
    ("events", Rule::Leaf),
    ("exec", Rule::Leaf),
    ("export", Rule::Leaf),
    ("history", Rule::Leaf),
    ("image", Rule::Management(IMAGE)),
    ("images", Rule::Leaf),
    ("import", Rule::Leaf),
    ("info", Rule::Leaf),
    ("inspect", Rule::Leaf),
    ("kill", Rule::Leaf),
    ("load", Rule::Leaf),
    ("login", Rule::Login),
    ("logout", Rule::Leaf),
    ("logs", Rule::Leaf),
    ("manifest", Rule::Management(MANIFEST)),
    ("network", Rule::Management(NETWORK)),
    ("node", Rule::Management(NODE)),
    ("pause", Rule::Leaf),
    ("plugin", Rule::Management(PLUGIN)),
    ("port", Rule::Leaf),
    ("ps", Rule::Leaf),
    ("pull", Rule::Leaf),
    ("push", Rule::Leaf),
    ("rename", Rule::Leaf),
    ("restart", Rule::Leaf),
    ("rm", Rule::Leaf),
    ("rmi", Rule::Leaf),
    ("run", Rule::Leaf),
    ("save", Rule::Leaf),
    ("scan", Rule::Scan),
    ("search", Rule::Leaf),
    ("secret", Rule::Management(SECRET)),
    ("serve", Rule::Leaf),
    ("service", Rule::Management(SERVICE)),
    ("stack", Rule::Management(STACK)),
    ("start", Rule::Leaf),
    ("stats", Rule::Leaf),
    ("stop", Rule::Leaf),
    ("swarm", Rule::Management(SWARM)),
    ("system", Rule::Management(SYSTEM)),
    ("tag", Rule::Leaf),
    ("top", Rule::Leaf),
    ("trust", Rule::Management(TRUST)),
    ("unpause", Rule::Leaf),
    ("update", Rule::Leaf),
    ("version", Rule::Leaf),
    ("volume", Rule::Management(VOLUME)),
    ("wait", Rule::Leaf),
];

/// The vocabulary entry equal to `word`, borrowed from the table
fn known(vocabulary: &'static [&'static str], word: &str) -> Option<&'static str> {
    vocabulary.iter().copied().find(|w| *w == word)
}

impl Rule {
    /// Look up a root command word
    pub fn for_root(word: &str) -> Option<(&'static str, Rule)> {
        ROOTS.iter().copied().find(|(root, _)| *root == word)
    }

    /// Every root command with its rule, sorted by name
    pub fn roots() -> &'static [(&'static str, Rule)] {
        ROOTS
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Leaf => "leaf",
            Rule::Management(_) => "management",
            Rule::Context => "context",
            Rule::Login => "login",
            Rule::Ecs => "ecs",
            Rule::Scan => "scan",
        }
    }

    /// Words this rule may append after the root word
    pub fn structural_words(&self) -> Vec<&'static str> {
        match self {
            Rule::Leaf => Vec::new(),
            Rule::Management(actions) => actions.to_vec(),
            Rule::Context => CONTEXT_ACTIONS
                .iter()
                .chain(CONTEXT_BACKENDS)
                .copied()
                .collect(),
            Rule::Login => LOGIN_PROVIDERS.to_vec(),
            Rule::Ecs => ECS_COMMANDS
                .iter()
                .chain(ECS_COMPOSE_ACTIONS)
                .copied()
                .collect(),
            Rule::Scan => SCAN_MODES.iter().map(|(_, word)| *word).collect(),
        }
    }

    /// Extend `signature` (already holding the root word) from the tokens
    /// after the root. Anything unrecognised stops the walk; the words
    /// confirmed so far stay.
    pub(crate) fn apply<S, G>(&self, scanner: &mut Scanner<'_, S, G>, signature: &mut Signature)
    where
        S: AsRef<str>,
        G: FlagLookup + ?Sized,
    {
        match self {
            Rule::Leaf => {}
            Rule::Management(actions) => {
                if let Some(action) = next_known(scanner, LocalFlags::NONE, *actions) {
                    signature.push(action);
                }
            }
            Rule::Context => match next_known(scanner, LocalFlags::NONE, CONTEXT_ACTIONS) {
                Some("create") => {
                    signature.push("create");
                    if let Some(backend) =
                        next_known(scanner, CONTEXT_CREATE_FLAGS, CONTEXT_BACKENDS)
                    {
                        signature.push(backend);
                    }
                }
                Some(action) => signature.push(action),
                None => {}
            },
            Rule::Login => {
                // Registry hostnames are redacted along with everything else
                if let Some(provider) = next_known(scanner, LOGIN_FLAGS, LOGIN_PROVIDERS) {
                    signature.push(provider);
                }
            }
            Rule::Ecs => match next_known(scanner, LocalFlags::NONE, ECS_COMMANDS) {
                Some("compose") => {
                    signature.push("compose");
                    if let Some(action) = find_action(scanner) {
                        signature.push(action);
                    }
                }
                Some(command) => signature.push(command),
                None => {}
            },
            Rule::Scan => {
                let Some(raw) = scanner.peek_raw() else {
                    return;
                };
                let mode = SCAN_MODES
                    .iter()
                    .find(|(marker, word)| raw == *marker || raw == *word);
                if let Some((_, word)) = mode {
                    scanner.bump();
                    signature.push(*word);
                }
            }
        }
    }
}

/// The next positional, if it is in `vocabulary`
fn next_known<S, G>(
    scanner: &mut Scanner<'_, S, G>,
    local: LocalFlags,
    vocabulary: &'static [&'static str],
) -> Option<&'static str>
where
    S: AsRef<str>,
    G: FlagLookup + ?Sized,
{
    match scanner.next_word(local) {
        Step::Word(word) => known(vocabulary, word),
        Step::End => None,
        Step::Unknown(_) => {
            debug!("unknown flag after command word, truncating signature");
            None
        }
    }
}

/// First positional after `ecs compose` that is a compose action. Other
/// positionals are skipped; flags may sit on either side of the action.
fn find_action<S, G>(scanner: &mut Scanner<'_, S, G>) -> Option<&'static str>
where
    S: AsRef<str>,
    G: FlagLookup + ?Sized,
{
    loop {
        match scanner.next_word(ECS_COMPOSE_FLAGS) {
            Step::Word(word) => {
                if let Some(action) = known(ECS_COMPOSE_ACTIONS, word) {
                    return Some(action);
                }
            }
            Step::End => return None,
            Step::Unknown(_) => {
                debug!("unknown flag in ecs compose, truncating signature");
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_are_sorted_and_unique() {
        let names: Vec<&str> = ROOTS.iter().map(|(name, _)| *name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_for_root() {
        assert_eq!(Rule::for_root("create"), Some(("create", Rule::Leaf)));
        assert_eq!(Rule::for_root("image"), Some(("image", Rule::Management(IMAGE))));
        assert_eq!(Rule::for_root("scan"), Some(("scan", Rule::Scan)));
        assert_eq!(Rule::for_root("my-container"), None);
        assert_eq!(Rule::for_root(""), None);
    }

    #[test]
    fn test_structural_words() {
        assert!(Rule::Leaf.structural_words().is_empty());
        assert_eq!(Rule::Scan.structural_words(), ["auth", "version"]);
        assert!(Rule::Context.structural_words().contains(&"aci"));
        assert!(Rule::Ecs.structural_words().contains(&"up"));
    }

    #[test]
    fn test_local_flag_tables_are_consistent() {
        for table in [CONTEXT_CREATE_FLAGS, LOGIN_FLAGS, ECS_COMPOSE_FLAGS] {
            for (spelling, _) in table.0 {
                assert!(spelling.starts_with('-'));
                assert!(!spelling.contains('='));
            }
        }
    }
}
