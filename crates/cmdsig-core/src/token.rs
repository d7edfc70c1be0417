//! Argument token classification

/// One argv element, classified without consulting any registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `--`
    Terminator,
    /// `--name` or `--name=value`
    Long { key: &'a str, attached: bool },
    /// `-x`, `-xyz`, `-x=value`, `-xVALUE`; `group` excludes the leading dash
    Short { group: &'a str },
    Positional(&'a str),
}

impl<'a> Token<'a> {
    pub fn parse(raw: &'a str) -> Self {
        if raw == "--" {
            return Token::Terminator;
        }

        if let Some(rest) = raw.strip_prefix("--") {
            return match rest.find('=') {
                Some(eq) => Token::Long {
                    key: &raw[..eq + 2],
                    attached: true,
                },
                None => Token::Long {
                    key: raw,
                    attached: false,
                },
            };
        }

        match raw.strip_prefix('-') {
            Some(group) if !group.is_empty() && !is_negative_number(group) => {
                Token::Short { group }
            }
            _ => Token::Positional(raw),
        }
    }

    pub fn is_flag(&self) -> bool {
        matches!(self, Token::Long { .. } | Token::Short { .. })
    }
}

/// `1`, `0.5`, `.5` (the part after the minus sign)
fn is_negative_number(rest: &str) -> bool {
    rest.chars().any(|c| c.is_ascii_digit())
        && rest.chars().all(|c| c.is_ascii_digit() || c == '.')
        && rest.matches('.').count() <= 1
}
