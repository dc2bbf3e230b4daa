use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::mechanisms::MechanismProvider;

/// SCRAM variants with credential storage support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ScramMechanism {
    #[serde(rename = "SCRAM-SHA-256")]
    ScramSha256,
    #[serde(rename = "SCRAM-SHA-512")]
    ScramSha512,
}

impl ScramMechanism {
    pub const ALL: [ScramMechanism; 2] = [ScramMechanism::ScramSha256, ScramMechanism::ScramSha512];

    pub fn mechanism_name(&self) -> &'static str {
        match self {
            ScramMechanism::ScramSha256 => "SCRAM-SHA-256",
            ScramMechanism::ScramSha512 => "SCRAM-SHA-512",
        }
    }

    pub fn hash_algorithm(&self) -> &'static str {
        match self {
            ScramMechanism::ScramSha256 => "SHA-256",
            ScramMechanism::ScramSha512 => "SHA-512",
        }
    }

    pub fn mac_algorithm(&self) -> &'static str {
        match self {
            ScramMechanism::ScramSha256 => "HmacSHA256",
            ScramMechanism::ScramSha512 => "HmacSHA512",
        }
    }

    /// Lowest iteration count accepted for stored credentials
    pub fn min_iterations(&self) -> u32 {
        4096
    }

    pub fn from_mechanism_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.mechanism_name() == name)
    }
}

impl fmt::Display for ScramMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mechanism_name())
    }
}

/// Built-in provider listing every `ScramMechanism`
#[derive(Debug, Clone, Copy, Default)]
pub struct ScramMechanisms;

impl ScramMechanisms {
    pub fn new() -> Self {
        Self
    }
}

impl MechanismProvider for ScramMechanisms {
    fn name(&self) -> &'static str {
        "scram"
    }

    fn mechanism_names(&self) -> Result<Vec<String>> {
        Ok(ScramMechanism::ALL
            .iter()
            .map(|m| m.mechanism_name().to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mechanism_names_in_order() {
        let names = ScramMechanisms::new().mechanism_names().unwrap();
        assert_eq!(names, vec!["SCRAM-SHA-256", "SCRAM-SHA-512"]);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(
            ScramMechanism::from_mechanism_name("SCRAM-SHA-512"),
            Some(ScramMechanism::ScramSha512)
        );
        assert_eq!(ScramMechanism::from_mechanism_name("scram-sha-512"), None);
        assert_eq!(ScramMechanism::from_mechanism_name("PLAIN"), None);
    }

    #[test]
    fn test_algorithms() {
        let m = ScramMechanism::ScramSha256;
        assert_eq!(m.hash_algorithm(), "SHA-256");
        assert_eq!(m.mac_algorithm(), "HmacSHA256");
        assert_eq!(m.min_iterations(), 4096);
        assert_eq!(ScramMechanism::ScramSha512.to_string(), "SCRAM-SHA-512");
    }
}
