//! Input keys recognized by the weapon demos.
//!
//! This module defines [`InputKey`], the small set of physical inputs the
//! facade and observer demos map to gun actions. Keys are parsed from their
//! display names so demo scripts and config files can spell them out.

use std::fmt;
use std::str::FromStr;

/// Enumeration of weapon-handling inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Left mouse button: fire.
    MouseL,
    /// Right mouse button: aim / lower.
    MouseR,
    /// R key: reload.
    R,
}

impl InputKey {
    pub fn name(self) -> &'static str {
        match self {
            InputKey::MouseL => "MouseL",
            InputKey::MouseR => "MouseR",
            InputKey::R => "R",
        }
    }
}

impl fmt::Display for InputKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InputKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "MouseL" => Ok(InputKey::MouseL),
            "MouseR" => Ok(InputKey::MouseR),
            "R" => Ok(InputKey::R),
            other => Err(format!("Unknown input key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        assert_eq!("MouseL".parse::<InputKey>(), Ok(InputKey::MouseL));
        assert_eq!(" MouseR ".parse::<InputKey>(), Ok(InputKey::MouseR));
        assert_eq!("R".parse::<InputKey>(), Ok(InputKey::R));
    }

    #[test]
    fn test_parse_unknown_key_is_error() {
        let err = "Space".parse::<InputKey>().unwrap_err();
        assert!(err.contains("Space"));
    }

    #[test]
    fn test_display_matches_parse() {
        for key in [InputKey::MouseL, InputKey::MouseR, InputKey::R] {
            assert_eq!(key.to_string().parse::<InputKey>(), Ok(key));
        }
    }
}
