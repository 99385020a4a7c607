pub const TOP_LEVEL_DOMAIN: &str = "app";
pub const AUTHOR: &str = "sneakergram";
pub const APP_NAME: &str = "sneakergram";

pub const CLI_CONFIG_FILE_NAME: &str = "config.toml";
