//! Flag-skipping cursor over the argument vector

use tracing::trace;

use crate::flags::{Chain, FlagLookup, LocalFlags};
use crate::token::Token;

/// Outcome of advancing to the next positional
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Word(&'a str),
    /// argv exhausted, or `--` reached
    End,
    /// A flag neither the local table nor the global registry knows
    Unknown(&'a str),
}

pub struct Scanner<'a, S, G: ?Sized> {
    args: &'a [S],
    pos: usize,
    global: &'a G,
    terminated: bool,
}

impl<'a, S: AsRef<str>, G: FlagLookup + ?Sized> Scanner<'a, S, G> {
    pub fn new(args: &'a [S], global: &'a G) -> Self {
        Self {
            args,
            pos: 0,
            global,
            terminated: false,
        }
    }

    /// The next raw token, untouched. `None` once `--` was seen.
    pub fn peek_raw(&self) -> Option<&'a str> {
        if self.terminated {
            return None;
        }
        let args = self.args;
        args.get(self.pos).map(AsRef::as_ref)
    }

    /// Consume the token returned by [`peek_raw`](Self::peek_raw)
    pub fn bump(&mut self) {
        self.pos += 1;
    }

    /// Skip flags (and their values) until the next positional
    ///
    /// `local` shadows the global registry for this step only.
    pub fn next_word(&mut self, local: LocalFlags) -> Step<'a> {
        let lookup = Chain(local, self.global);
        let args = self.args;

        while !self.terminated {
            let Some(raw) = args.get(self.pos).map(AsRef::as_ref) else {
                break;
            };
            self.pos += 1;

            match Token::parse(raw) {
                Token::Terminator => self.terminated = true,
                Token::Positional(word) => return Step::Word(word),
                Token::Long { key, attached } => {
                    if !lookup.is_known(key) {
                        return Step::Unknown(raw);
                    }
                    if lookup.takes_value(key) && !attached {
                        self.pos += 1;
                    }
                    trace!(flag = key, "skipped flag");
                }
                Token::Short { group } => {
                    if !self.skip_short_group(group, &lookup) {
                        return Step::Unknown(raw);
                    }
                    trace!(flag = raw, "skipped short flag group");
                }
            }
        }

        Step::End
    }

    /// Resolve `-abc` left to right. The first value-taking letter owns the
    /// rest of the group, or the following token when the group ends there.
    fn skip_short_group(&mut self, group: &str, lookup: &impl FlagLookup) -> bool {
        for (i, c) in group.char_indices() {
            let key = format!("-{}", c);
            if !lookup.is_known(&key) {
                return false;
            }

            let rest = &group[i + c.len_utf8()..];
            if lookup.takes_value(&key) {
                if rest.is_empty() {
                    self.pos += 1;
                }
                return true;
            }
            if rest.starts_with('=') {
                return true;
            }
        }
        true
    }
}
