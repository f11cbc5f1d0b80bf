use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Shape of a synthetic sprint used to generate sample burndown data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    #[default]
    Ideal,
    Delayed,
    Ahead,
    Stuck,
}

/// Noise and pace applied to the ideal daily burn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioProfile {
    /// Fraction of the daily target used as the uniform noise bound
    pub variability: f64,
    /// Multiplier on the ideal daily burn
    pub completion: f64,
}

impl Scenario {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ideal => "ideal",
            Self::Delayed => "delayed",
            Self::Ahead => "ahead",
            Self::Stuck => "stuck",
        }
    }

    pub fn profile(&self) -> ScenarioProfile {
        match self {
            Self::Ideal => ScenarioProfile {
                variability: 0.1,
                completion: 1.0,
            },
            Self::Delayed => ScenarioProfile {
                variability: 0.2,
                completion: 0.7,
            },
            Self::Ahead => ScenarioProfile {
                variability: 0.15,
                completion: 1.2,
            },
            Self::Stuck => ScenarioProfile {
                variability: 0.05,
                completion: 0.3,
            },
        }
    }
}

impl FromStr for Scenario {
    type Err = Infallible;

    /// Unknown names fall back to `Ideal`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delayed" => Ok(Self::Delayed),
            "ahead" => Ok(Self::Ahead),
            "stuck" => Ok(Self::Stuck),
            _ => Ok(Self::Ideal),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Scenario {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Scenario {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Scenario::from_str(&s).unwrap_or_default())
    }
}
