use crate::diagnostics::check;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use provider::{Config, K8sProvider, ProviderConfig};
use serde_json::json;

/// Read an object through a data source.
#[derive(Debug, Parser)]
pub(crate) struct Read {
    /// The data source type name, e.g. `k8s_gateway_solo_io_virtual_service_v1`.
    type_name: String,

    /// The name of the object.
    #[clap(long)]
    name: String,

    /// The namespace of the object.
    #[clap(long, short = 'n', default_value = "default")]
    namespace: String,
}

impl Read {
    pub(crate) async fn run(
        self,
        provider: &K8sProvider,
        provider_config: ProviderConfig,
    ) -> Result<()> {
        let provider_config = serde_json::to_value(&provider_config)
            .context("Unable to encode the provider configuration")?;
        let configured = provider.configure(&Config::new(provider_config)).await;
        check(&configured.diagnostics)?;

        info!(
            "Reading '{}' '{}' in namespace '{}'",
            self.type_name, self.name, self.namespace
        );
        let config = Config::new(json!({
            "metadata": { "name": self.name, "namespace": self.namespace }
        }));
        let response = provider
            .read_data_source(&self.type_name, configured.provider_data, config)
            .await;
        check(&response.diagnostics)?;

        let state = response
            .state
            .into_raw()
            .context("The data source did not write any state")?;
        println!(
            "{}",
            serde_json::to_string_pretty(&state).context("Could not create string from state.")?
        );
        Ok(())
    }
}
