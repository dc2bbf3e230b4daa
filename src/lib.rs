pub mod cli;
pub mod config_def;
pub mod error;
pub mod mechanisms;
pub mod output;
pub mod quota;

pub use cli::{Args, OutputFormat, SchemaArg};
pub use config_def::{ConfigDef, ConfigKey, ConfigType, ConfigValue, Importance, ParsedConfig};
pub use error::{ConfigError, Result};
pub use quota::{client_configs, is_quota_config, user_configs, user_configs_with};
