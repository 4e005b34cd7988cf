/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "promptgen.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "PROMPTGEN_CONFIG";

/// Environment variable holding the log filter.
pub const LOG_ENV_VAR: &str = "PROMPTGEN_LOG";
