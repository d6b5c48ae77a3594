use crate::components::reactive::RenderPolicy;
use serde::Deserialize;

/// `[ui]` section of the configuration file
#[derive(Debug, Deserialize, Default, Clone)]
pub struct UIConfig {
    /// When reactive components re-render on attribute writes (default: every write)
    render_policy: Option<RenderPolicy>,
}

impl UIConfig {
    pub fn render_policy(&self) -> RenderPolicy {
        self.render_policy.unwrap_or_default()
    }
}

/// `[catalog]` section of the configuration file
#[derive(Debug, Deserialize, Default, Clone)]
pub struct CatalogConfig {
    /// JSON dataset to load instead of the bundled one
    dataset_path: Option<String>,
}

impl CatalogConfig {
    pub fn dataset_path(&self) -> Option<&str> {
        self.dataset_path.as_deref()
    }
}
