use serde::{Deserialize, Serialize};

/// One of the two selectable actions offered every round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice {
    Safe,
    Risky,
}

impl Choice {
    pub fn as_str(&self) -> &'static str {
        match self {
            Choice::Safe => "safe",
            Choice::Risky => "risky",
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
