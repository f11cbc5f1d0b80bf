use std::str::FromStr;

use serde::Deserialize;

/// How new sprint ids are generated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Random v4 UUIDs
    #[default]
    Uuid,
    /// Process-local counter: "1", "2", ...
    Sequential,
}

impl IdStrategy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uuid => "uuid",
            Self::Sequential => "sequential",
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "uuid" => Ok(Self::Uuid),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!("unknown id strategy '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub id_strategy: IdStrategy,
}
