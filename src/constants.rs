//! Application-wide constants.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Shadesmith";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "shadesmith";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Shadesmith";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "SHADESMITH_CONFIG_DIR";

/// Settings file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Log file written by the TUI (inside the config directory).
pub const LOG_FILE_NAME: &str = "shadesmith.log";

/// Default group name of the exported snippet.
pub const DEFAULT_GROUP_NAME: &str = "primary";

/// Default visibility of the "Copied" indicator, in milliseconds.
pub const DEFAULT_COPIED_MS: u64 = 2000;
