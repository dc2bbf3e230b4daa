use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::error::{ConfigError, Result};

/// Value domain of a configuration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigType {
    /// 64-bit signed integer
    Long,
    /// 64-bit float
    Double,
    String,
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigType::Long => write!(f, "long"),
            ConfigType::Double => write!(f, "double"),
            ConfigType::String => write!(f, "string"),
        }
    }
}

/// Advisory classification, carries no behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Importance::High => write!(f, "high"),
            Importance::Medium => write!(f, "medium"),
            Importance::Low => write!(f, "low"),
        }
    }
}

/// A typed configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Long(i64),
    Double(f64),
    String(String),
}

impl ConfigValue {
    pub fn config_type(&self) -> ConfigType {
        match self {
            ConfigValue::Long(_) => ConfigType::Long,
            ConfigValue::Double(_) => ConfigType::Double,
            ConfigValue::String(_) => ConfigType::String,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Long(v) => write!(f, "{}", v),
            ConfigValue::Double(v) => write!(f, "{}", v),
            ConfigValue::String(v) => write!(f, "{}", v),
        }
    }
}

/// One schema slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigKey {
    pub name: String,
    #[serde(rename = "type")]
    pub config_type: ConfigType,
    #[serde(rename = "default")]
    pub default_value: Option<ConfigValue>,
    pub importance: Importance,
    pub documentation: String,
}

impl ConfigKey {
    pub fn new(
        name: impl Into<String>,
        config_type: ConfigType,
        default_value: Option<ConfigValue>,
        importance: Importance,
        documentation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            config_type,
            default_value,
            importance,
            documentation: documentation.into(),
        }
    }

    /// Parse raw text into this key's value domain
    pub fn parse_value(&self, raw: &str) -> Result<ConfigValue> {
        let trimmed = raw.trim();
        let invalid = |reason: String| ConfigError::InvalidValue {
            name: self.name.clone(),
            value: raw.to_string(),
            reason,
        };

        match self.config_type {
            ConfigType::Long => trimmed
                .parse::<i64>()
                .map(ConfigValue::Long)
                .map_err(|e| invalid(format!("expected a long: {}", e))),
            ConfigType::Double => match trimmed.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(ConfigValue::Double(v)),
                Ok(_) => Err(invalid("expected a finite double".to_string())),
                Err(e) => Err(invalid(format!("expected a double: {}", e))),
            },
            ConfigType::String => Ok(ConfigValue::String(trimmed.to_string())),
        }
    }
}

/// Ordered collection of configuration keys, indexed by name
///
/// Keys keep their definition order. Defining the same name twice is
/// rejected, so a built schema never shadows an earlier entry.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigDef {
    #[serde(rename = "configs")]
    keys: Vec<ConfigKey>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ConfigDef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a new entry; chainable
    pub fn define(
        &mut self,
        name: impl Into<String>,
        config_type: ConfigType,
        default_value: Option<ConfigValue>,
        importance: Importance,
        documentation: impl Into<String>,
    ) -> Result<&mut Self> {
        self.define_key(ConfigKey::new(
            name,
            config_type,
            default_value,
            importance,
            documentation,
        ))
    }

    pub fn define_key(&mut self, key: ConfigKey) -> Result<&mut Self> {
        if self.index.contains_key(&key.name) {
            return Err(ConfigError::DuplicateDefinition(key.name));
        }

        if let Some(default) = &key.default_value {
            if default.config_type() != key.config_type {
                return Err(ConfigError::DefaultTypeMismatch {
                    name: key.name,
                    expected: key.config_type,
                });
            }
        }

        tracing::trace!(name = %key.name, config_type = %key.config_type, "defined config key");
        self.index.insert(key.name.clone(), self.keys.len());
        self.keys.push(key);
        Ok(self)
    }

    pub fn find_key(&self, name: &str) -> Option<&ConfigKey> {
        self.index.get(name).map(|&i| &self.keys[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Entry names in definition order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.name.as_str())
    }

    pub fn keys(&self) -> &[ConfigKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Resolve raw overrides against this schema
    ///
    /// Every override must name a defined key and parse into its type.
    /// Keys without an override fall back to their default; keys with no
    /// default stay unset. Either all overrides resolve or an error is returned.
    pub fn parse(&self, overrides: &HashMap<String, String>) -> Result<ParsedConfig> {
        if let Some(unknown) = overrides.keys().find(|name| !self.contains(name)) {
            return Err(ConfigError::UnknownConfig(unknown.clone()));
        }

        let mut entries = Vec::with_capacity(self.keys.len());
        for key in &self.keys {
            let entry = match overrides.get(&key.name) {
                Some(raw) => ParsedEntry {
                    name: key.name.clone(),
                    value: Some(key.parse_value(raw)?),
                    source: ValueSource::Override,
                },
                None => ParsedEntry {
                    name: key.name.clone(),
                    value: key.default_value.clone(),
                    source: if key.default_value.is_some() {
                        ValueSource::Default
                    } else {
                        ValueSource::Unset
                    },
                },
            };
            entries.push(entry);
        }

        tracing::debug!(overrides = overrides.len(), entries = entries.len(), "parsed config overrides");
        Ok(ParsedConfig { entries })
    }
}

/// Where a resolved value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Override,
    Default,
    Unset,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Override => write!(f, "override"),
            ValueSource::Default => write!(f, "default"),
            ValueSource::Unset => write!(f, "unset"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedEntry {
    pub name: String,
    pub value: Option<ConfigValue>,
    pub source: ValueSource,
}

/// Values resolved against a `ConfigDef`, in schema order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedConfig {
    entries: Vec<ParsedEntry>,
}

impl ParsedConfig {
    pub fn entries(&self) -> &[ParsedEntry] {
        &self.entries
    }

    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.value.as_ref())
    }

    pub fn get_long(&self, name: &str) -> Option<i64> {
        match self.get(name) {
            Some(ConfigValue::Long(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_double(&self, name: &str) -> Option<f64> {
        match self.get(name) {
            Some(ConfigValue::Double(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(ConfigValue::String(v)) => Some(v.as_str()),
            _ => None,
        }
    }
}
