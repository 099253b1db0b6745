use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The provider block. Every attribute is optional; with none set the provider infers its
/// Kubernetes configuration the way `kubectl` does.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Do not connect to a cluster. Only data sources that work without a cluster can be used.
    #[serde(default)]
    pub offline: Option<bool>,
    /// Path to a kubeconfig file.
    #[serde(default)]
    pub kubeconfig: Option<PathBuf>,
    /// The kubeconfig context to use instead of the current one.
    #[serde(default)]
    pub context: Option<String>,
}

impl ProviderConfig {
    pub fn is_offline(&self) -> bool {
        self.offline.unwrap_or(false)
    }
}
