use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    #[default]
    Standard,
    Enhanced,
}

impl ExtractionMode {
    pub fn from_enhanced(enhanced: bool) -> Self {
        if enhanced {
            ExtractionMode::Enhanced
        } else {
            ExtractionMode::Standard
        }
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionMode::Standard => write!(f, "standard"),
            ExtractionMode::Enhanced => write!(f, "enhanced"),
        }
    }
}

impl FromStr for ExtractionMode {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(ExtractionMode::Standard),
            "enhanced" => Ok(ExtractionMode::Enhanced),
            _ => Err(format!("Unknown extraction mode: {s}")),
        }
    }
}
