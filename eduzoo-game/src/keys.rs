//! Shared parsing error for the closed key sets (avatars, settings,
//! achievements, activities) that arrive as strings from the page.

/// A string key that does not name any member of a fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} key `{key}`")]
pub struct ParseKeyError {
    pub kind: &'static str,
    pub key: String,
}

impl ParseKeyError {
    #[must_use]
    pub fn new(kind: &'static str, key: &str) -> Self {
        Self {
            kind,
            key: key.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_kind_and_key() {
        let err = ParseKeyError::new("avatar", "dragon");
        assert_eq!(err.to_string(), "unknown avatar key `dragon`");
    }
}
