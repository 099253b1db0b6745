use crate::client::{KubeGetter, ResourceGetter};
use crate::data_source::{
    ConfigureRequest, DataSource, MetadataRequest, ReadRequest, ReadResponse,
};
use crate::schema::{Attribute, Schema};
use crate::{registry, Config, Diagnostics, ProviderConfig};
use log::{debug, info};
use std::sync::Arc;

/// The provider's type name, the prefix of every data source type name.
pub const PROVIDER_TYPE_NAME: &str = "k8s";

/// What `configure` hands to the provider's data sources.
#[derive(Debug, Clone)]
pub struct ProviderData {
    pub offline: bool,
    pub getter: Option<Arc<dyn ResourceGetter>>,
}

impl ProviderData {
    pub fn offline() -> Self {
        Self {
            offline: true,
            getter: None,
        }
    }

    pub fn with_getter(getter: Arc<dyn ResourceGetter>) -> Self {
        Self {
            offline: false,
            getter: Some(getter),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigureProviderResponse {
    /// Set when configuration succeeded.
    pub provider_data: Option<Arc<ProviderData>>,
    pub diagnostics: Diagnostics,
}

/// The Kubernetes provider: its schema, configuration and the data sources it serves.
#[derive(Debug, Clone)]
pub struct K8sProvider {
    version: String,
}

impl Default for K8sProvider {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl K8sProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_name(&self) -> &'static str {
        PROVIDER_TYPE_NAME
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn schema(&self) -> Schema {
        Schema::new("Exposes Kubernetes custom resources as data sources.")
            .with_attribute(
                "offline",
                Attribute::optional_bool().with_description(
                    "Do not connect to a cluster. Only manifest data sources can be used.",
                ),
            )
            .with_attribute(
                "kubeconfig",
                Attribute::optional_string().with_description(
                    "Path to a kubeconfig file. Defaults to the usual kubectl lookup.",
                ),
            )
            .with_attribute(
                "context",
                Attribute::optional_string()
                    .with_description("The kubeconfig context to use instead of the current one."),
            )
    }

    /// Decodes the provider block and, unless offline, creates the Kubernetes client shared by
    /// all data sources.
    pub async fn configure(&self, config: &Config) -> ConfigureProviderResponse {
        let mut response = ConfigureProviderResponse {
            diagnostics: self.schema().validate(config.raw()),
            ..ConfigureProviderResponse::default()
        };
        if response.diagnostics.has_error() {
            return response;
        }
        let provider_config: ProviderConfig = match config.get(&mut response.diagnostics) {
            None => return response,
            Some(provider_config) => provider_config,
        };

        if provider_config.is_offline() {
            info!("Provider is offline, only manifest data sources are available");
            response.provider_data = Some(Arc::new(ProviderData::offline()));
            return response;
        }
        match KubeGetter::from_provider_config(&provider_config).await {
            Ok(getter) => {
                response.provider_data = Some(Arc::new(ProviderData::with_getter(Arc::new(getter))))
            }
            Err(e) => response.diagnostics.add_error(
                "Unable to create Kubernetes client",
                format!(
                    "The provider could not connect to Kubernetes. Check the kubeconfig and \
                    context settings or set 'offline = true': {}",
                    e
                ),
            ),
        }
        response
    }

    pub fn data_sources(&self) -> Vec<Box<dyn DataSource>> {
        registry::data_sources()
    }

    /// The type names of all data sources, in registry order.
    pub fn data_source_type_names(&self) -> Vec<String> {
        self.data_sources()
            .iter()
            .map(|data_source| self.data_source_type_name(data_source.as_ref()))
            .collect()
    }

    /// Creates the data source named `type_name`, if there is one. Other data sources are not
    /// created.
    pub fn data_source(&self, type_name: &str) -> Option<Box<dyn DataSource>> {
        registry::factories()
            .iter()
            .find(|factory| factory.type_name(self.type_name()) == type_name)
            .map(|factory| factory.create())
    }

    /// Runs a data source's lifecycle for a single read: validate the configuration, configure
    /// the data source with `provider_data` and read. Each step stops on error diagnostics.
    pub async fn read_data_source(
        &self,
        type_name: &str,
        provider_data: Option<Arc<ProviderData>>,
        config: Config,
    ) -> ReadResponse {
        let mut response = ReadResponse::default();
        let mut data_source = match self.data_source(type_name) {
            Some(data_source) => data_source,
            None => {
                response.diagnostics.add_error(
                    "Unknown data source",
                    format!("The provider has no data source named '{}'.", type_name),
                );
                return response;
            }
        };

        let diagnostics = data_source.validate_config(&config);
        if diagnostics.has_error() {
            response.diagnostics = diagnostics;
            return response;
        }
        let configured = data_source.configure(&ConfigureRequest { provider_data });
        if configured.diagnostics.has_error() {
            response.diagnostics = configured.diagnostics;
            return response;
        }

        debug!("Reading data source '{}'", type_name);
        data_source.read(&ReadRequest { config }).await
    }

    fn data_source_type_name(&self, data_source: &dyn DataSource) -> String {
        data_source
            .metadata(&MetadataRequest {
                provider_type_name: self.type_name().to_string(),
            })
            .type_name
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn configure_offline() {
        let response = K8sProvider::new()
            .configure(&Config::new(json!({ "offline": true })))
            .await;
        assert!(response.diagnostics.is_empty());
        let provider_data = response.provider_data.unwrap();
        assert!(provider_data.offline);
        assert!(provider_data.getter.is_none());
    }

    #[tokio::test]
    async fn configure_with_missing_kubeconfig() {
        let response = K8sProvider::new()
            .configure(&Config::new(json!({
                "kubeconfig": "/nonexistent/kubeconfig",
                "context": null,
                "offline": false
            })))
            .await;
        assert!(response.provider_data.is_none());
        assert_eq!(response.diagnostics.len(), 1);
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            "Unable to create Kubernetes client"
        );
    }

    #[tokio::test]
    async fn unknown_data_source() {
        let response = K8sProvider::new()
            .read_data_source("k8s_nothing_v1", None, Config::new(json!({})))
            .await;
        assert!(response.state.is_null());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            "Unknown data source"
        );
    }

    #[test]
    fn data_source_lookup() {
        let provider = K8sProvider::new();
        let data_source = provider
            .data_source("k8s_gateway_solo_io_virtual_host_option_v1_manifest")
            .unwrap();
        assert_eq!(
            provider.data_source_type_name(data_source.as_ref()),
            "k8s_gateway_solo_io_virtual_host_option_v1_manifest"
        );
        assert!(provider
            .data_source("k8s_gateway_solo_io_route_table_v1")
            .is_some());
        assert!(provider
            .data_source("k8s_gateway_solo_io_route_table_v1_manifest")
            .is_some());
        assert!(provider.data_source("k8s_gateway_solo_io_v1").is_none());
    }
}
