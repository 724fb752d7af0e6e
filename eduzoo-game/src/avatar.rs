use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::keys::ParseKeyError;

/// Animal the player picks on the avatar screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Avatar {
    #[default]
    Monkey,
    Owl,
    Fox,
    Tiger,
    Koala,
    Elephant,
}

impl Avatar {
    /// Menu order.
    pub const ALL: [Self; 6] = [
        Self::Monkey,
        Self::Owl,
        Self::Fox,
        Self::Tiger,
        Self::Koala,
        Self::Elephant,
    ];

    /// Key used in the save payload and in the menu's `data-avatar` attribute.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Monkey => "monkey",
            Self::Owl => "owl",
            Self::Fox => "fox",
            Self::Tiger => "tiger",
            Self::Koala => "koala",
            Self::Elephant => "elephant",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Monkey => "🐵",
            Self::Owl => "🦉",
            Self::Fox => "🦊",
            Self::Tiger => "🐯",
            Self::Koala => "🐨",
            Self::Elephant => "🐘",
        }
    }
}

impl fmt::Display for Avatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Avatar {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|avatar| avatar.key() == s)
            .ok_or_else(|| ParseKeyError::new("avatar", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_back_to_the_same_avatar() {
        for avatar in Avatar::ALL {
            assert_eq!(avatar.key().parse::<Avatar>().unwrap(), avatar);
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "Dragon".parse::<Avatar>().unwrap_err();
        assert_eq!(err.kind, "avatar");
        assert!("Monkey".parse::<Avatar>().is_err(), "keys are case sensitive");
    }

    #[test]
    fn serializes_as_lowercase_key() {
        assert_eq!(serde_json::to_string(&Avatar::Koala).unwrap(), "\"koala\"");
        assert_eq!(Avatar::default(), Avatar::Monkey);
        assert_eq!(Avatar::Tiger.emoji(), "🐯");
    }
}
