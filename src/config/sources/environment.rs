//! Environment source: KUBEC_<SECTION>__<KEY>, e.g. KUBEC_LOGGING__LEVEL=debug.

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::Environment;

pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(
        Environment::with_prefix("KUBEC")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    )
}
