//! Merge rules: defaults first; later sources override earlier ones key by key.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("logging.enabled", false)?
        .set_default("logging.level", "info")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")?
        .set_default("ui.color", true)?
        .set_default("ui.page_size", 15)
}
