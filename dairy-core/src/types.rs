//! Shared domain types

use serde::{Deserialize, Serialize};

/// Identifier of a registered user. Owns every other record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Milking collection event, two per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilkSession {
    Morning,
    Night,
}

impl MilkSession {
    pub fn as_str(&self) -> &'static str {
        match self {
            MilkSession::Morning => "morning",
            MilkSession::Night => "night",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "morning" => Some(MilkSession::Morning),
            "night" => Some(MilkSession::Night),
            _ => None,
        }
    }
}

impl std::fmt::Display for MilkSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
