use crate::error::Result;

pub mod scram;

pub use scram::{ScramMechanism, ScramMechanisms};

/// Source of the authentication mechanism names that get a credential slot
pub trait MechanismProvider: Send + Sync {
    /// Provider name
    fn name(&self) -> &'static str;

    /// Supported mechanism names, in the order their entries are defined
    fn mechanism_names(&self) -> Result<Vec<String>>;
}

/// Operator-supplied mechanism list
#[derive(Debug, Clone, Default)]
pub struct StaticMechanisms {
    names: Vec<String>,
}

impl StaticMechanisms {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl MechanismProvider for StaticMechanisms {
    fn name(&self) -> &'static str {
        "static"
    }

    fn mechanism_names(&self) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }
}
