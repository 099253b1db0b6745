use crate::diagnostics::check;
use anyhow::{Context, Result};
use clap::Parser;
use provider::{Config, K8sProvider};
use serde_json::{json, Value};
use std::path::PathBuf;

/// Render a manifest data source. The provider is always configured offline.
#[derive(Debug, Parser)]
pub(crate) struct Manifest {
    /// The manifest data source type name, e.g.
    /// `k8s_gateway_solo_io_virtual_service_v1_manifest`.
    type_name: String,

    /// A YAML or JSON file with the data source configuration (`metadata` and `spec`).
    #[clap(long = "config", short = 'f')]
    config: PathBuf,
}

impl Manifest {
    pub(crate) async fn run(self, provider: &K8sProvider) -> Result<()> {
        let contents = tokio::fs::read_to_string(&self.config)
            .await
            .context(format!("Unable to read config file '{}'", self.config.display()))?;
        let config: Value = serde_yaml::from_str(&contents)
            .context(format!("Unable to parse config file '{}'", self.config.display()))?;

        let configured = provider
            .configure(&Config::new(json!({ "offline": true })))
            .await;
        check(&configured.diagnostics)?;
        let response = provider
            .read_data_source(&self.type_name, configured.provider_data, Config::new(config))
            .await;
        check(&response.diagnostics)?;

        let yaml = response
            .state
            .raw()
            .and_then(|state| state.get("yaml"))
            .and_then(Value::as_str)
            .context("The data source did not render a manifest")?;
        print!("{}", yaml);
        Ok(())
    }
}
