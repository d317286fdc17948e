//! Configuration module.

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

/// Engine-facing configuration consumed by the orchestrator.
///
/// The demo binary derives this from [`ResolvedConfig`]; embedders construct
/// it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
    /// When `true`, initialization skips the eager first fetch and data is
    /// loaded only once a page is explicitly requested.
    pub lazy_load: bool,

    /// Cap on consecutive empty-page retreats within one fetch dispatch.
    ///
    /// Retreats also stop structurally at page 1; the cap only guards
    /// against a data layer that keeps reporting a previous page where
    /// none can exist.
    pub max_retreats: u32,

    /// Message the view shows when a fetch finds no results at all.
    pub empty_message: String,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            lazy_load: false,
            max_retreats: 32,
            empty_message: "No results found".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads_eagerly() {
        let config = PagerConfig::default();
        assert!(!config.lazy_load);
    }

    #[test]
    fn default_config_bounds_retreats() {
        let config = PagerConfig::default();
        assert!(config.max_retreats > 0);
    }
}
