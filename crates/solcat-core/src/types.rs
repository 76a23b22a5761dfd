use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a solution template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Draft,
    Review,
    Active,
    Deprecated,
    Retired,
}

impl Status {
    pub fn all() -> &'static [Status] {
        &[
            Status::Draft,
            Status::Review,
            Status::Active,
            Status::Deprecated,
            Status::Retired,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Draft => "draft",
            Status::Review => "review",
            Status::Active => "active",
            Status::Deprecated => "deprecated",
            Status::Retired => "retired",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Draft
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Status::Draft),
            "review" => Ok(Status::Review),
            "active" => Ok(Status::Active),
            "deprecated" => Ok(Status::Deprecated),
            "retired" => Ok(Status::Retired),
            _ => Err(crate::error::CatalogError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Complexity
// ---------------------------------------------------------------------------

/// Delivery complexity band, used for catalog statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Complexity {
    type Err = crate::error::CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Complexity::Low),
            "medium" => Ok(Complexity::Medium),
            "high" => Ok(Complexity::High),
            _ => Err(crate::error::CatalogError::InvalidComplexity(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn status_round_trips_through_str() {
        for &status in Status::all() {
            assert_eq!(Status::from_str(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(Status::from_str("experimental").is_err());
    }

    #[test]
    fn status_serde_uses_snake_case() {
        let yaml = serde_yaml::to_string(&Status::Deprecated).unwrap();
        assert_eq!(yaml.trim(), "deprecated");
        let parsed: Status = serde_yaml::from_str("active").unwrap();
        assert_eq!(parsed, Status::Active);
    }

    #[test]
    fn complexity_round_trips_through_str() {
        for c in [Complexity::Low, Complexity::Medium, Complexity::High] {
            assert_eq!(Complexity::from_str(c.as_str()).unwrap(), c);
        }
    }
}
