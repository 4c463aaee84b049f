use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name of a team
///
/// # Invariants
/// - Between 3 and 100 characters after trimming
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamName(String);

impl TeamName {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 100;

    /// Creates a new TeamName value object
    ///
    /// # Example
    /// ```
    /// use teams_api::domain::team::value_objects::TeamName;
    ///
    /// let name = TeamName::new("  River Cleaners ").expect("valid name");
    /// assert_eq!(name.as_str(), "River Cleaners");
    /// ```
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into().trim().to_string();
        let len = name.chars().count();

        if len < Self::MIN_LEN {
            return Err(format!(
                "Team name must be at least {} characters",
                Self::MIN_LEN
            ));
        }
        if len > Self::MAX_LEN {
            return Err(format!(
                "Team name must be at most {} characters",
                Self::MAX_LEN
            ));
        }

        Ok(TeamName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// External lookup key for a team, shared with people who want to join it
///
/// Distinct from the internal primary key.
///
/// # Invariants
/// - Between 3 and 15 characters after trimming
/// - No whitespace inside the identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamIdentifier(String);

impl TeamIdentifier {
    pub const MIN_LEN: usize = 3;
    pub const MAX_LEN: usize = 15;

    /// Creates a new TeamIdentifier value object
    ///
    /// # Example
    /// ```
    /// use teams_api::domain::team::value_objects::TeamIdentifier;
    ///
    /// assert!(TeamIdentifier::new("river42").is_ok());
    /// assert!(TeamIdentifier::new("no spaces").is_err());
    /// ```
    pub fn new(identifier: impl Into<String>) -> Result<Self, String> {
        let identifier = identifier.into().trim().to_string();
        let len = identifier.chars().count();

        if len < Self::MIN_LEN {
            return Err(format!(
                "Team identifier must be at least {} characters",
                Self::MIN_LEN
            ));
        }
        if len > Self::MAX_LEN {
            return Err(format!(
                "Team identifier must be at most {} characters",
                Self::MAX_LEN
            ));
        }
        if identifier.chars().any(char::is_whitespace) {
            return Err("Team identifier cannot contain spaces".to_string());
        }

        Ok(TeamIdentifier(identifier))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TeamIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
