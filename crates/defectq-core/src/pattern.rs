//! Glob-style run-name patterns.
//!
//! Filter syntax is deliberately small: `*` matches any substring
//! (including the empty one), `\` escapes the next character, everything
//! else is literal. Matching is case-sensitive and anchored over the whole
//! name — an empty pattern matches only the empty name, and nothing is
//! implicitly "match all" except the lone `*`.

use regex::Regex;

use crate::error::QueryError;

/// A compiled run-name filter.
///
/// Translation to an anchored regex happens once in [`NamePattern::compile`];
/// the compiled form is reused across an entire registry snapshot.
#[derive(Debug, Clone)]
pub struct NamePattern {
    source: String,
    regex: Regex,
}

impl NamePattern {
    /// Compile a filter string.
    ///
    /// Fails with `QueryError::InvalidPattern` on malformed syntax (a
    /// trailing `\` with nothing left to escape) rather than quietly
    /// matching it literally.
    pub fn compile(pattern: &str) -> Result<Self, QueryError> {
        let mut body = String::with_capacity(pattern.len() + 8);
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            match c {
                '*' => body.push_str(".*"),
                '\\' => match chars.next() {
                    Some(escaped) => body.push_str(&regex::escape(&escaped.to_string())),
                    None => {
                        return Err(QueryError::InvalidPattern {
                            pattern: pattern.to_string(),
                            reason: "trailing backslash with nothing to escape".to_string(),
                        });
                    }
                },
                literal => body.push_str(&regex::escape(&literal.to_string())),
            }
        }

        let anchored = format!("^(?:{})$", body);
        let regex = Regex::new(&anchored).map_err(|e| QueryError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;

        Ok(NamePattern {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Whether the whole `name` matches this filter.
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The filter string this pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }
}
