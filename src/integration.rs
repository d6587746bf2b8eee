use seo_max_config::SiteConfig;
use seo_max_config::ValidationError;

/// Name every later build stage uses to import the validated configuration.
pub const CONFIG_MODULE_NAME: &str = "virtual:seo-max/config";

/// Host capability for registering a synthetic, importable compilation unit.
pub trait ModuleRegistry {
    fn register(&mut self, name: &str, source: &str);
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("failed to serialize config module: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Validates raw user options and registers the config virtual module.
///
/// Called exactly once per build, from the host's configuration phase.  On
/// any validation failure nothing is registered and the error is returned
/// for the host to abort with; there is no fallback-to-defaults path, since
/// a silently defaulted configuration would corrupt every page importing it.
pub fn emit_config_module(
    raw: &serde_json::Value,
    registry: &mut dyn ModuleRegistry,
) -> Result<(), EmitError> {
    let config = SiteConfig::from_raw(raw)?;
    let source = module_source(&config)?;
    log::debug!("registering `{CONFIG_MODULE_NAME}`");
    registry.register(CONFIG_MODULE_NAME, &source);
    Ok(())
}

/// Source text that default-exports the configuration as a JSON-shaped value.
fn module_source(config: &SiteConfig) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(config)?;
    Ok(format!("export default {json};\n"))
}
