use super::error::{self, Result};
use super::ResourceGetter;
use crate::ProviderConfig;
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::core::{ApiResource, DynamicObject};
use kube::{Api, Client, Config};
use log::{debug, trace};
use snafu::ResultExt;
use std::fmt::{Debug, Formatter};

/// A [`ResourceGetter`] backed by a `kube::Client`.
#[derive(Clone)]
pub struct KubeGetter {
    client: Client,
}

impl KubeGetter {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a client from the provider configuration. An explicit kubeconfig path or context
    /// is loaded from the kubeconfig file; otherwise the configuration is inferred from the
    /// environment the same way `kubectl` does (in-cluster or `KUBECONFIG`).
    pub async fn from_provider_config(config: &ProviderConfig) -> Result<Self> {
        let kube_config = match (&config.kubeconfig, &config.context) {
            (None, None) => {
                debug!("Inferring Kubernetes configuration");
                Config::infer().await.context(error::ConfigInferSnafu)?
            }
            (path, context) => {
                let kubeconfig = match path {
                    Some(path) => {
                        debug!("Reading kubeconfig from '{}'", path.display());
                        Kubeconfig::read_from(path)
                            .context(error::KubeconfigReadSnafu { path: path.clone() })?
                    }
                    None => Kubeconfig::read().context(error::KubeconfigDefaultSnafu)?,
                };
                let options = KubeConfigOptions {
                    context: context.clone(),
                    ..KubeConfigOptions::default()
                };
                Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .context(error::KubeconfigContextSnafu {
                        context: context.clone().unwrap_or_else(|| "current".to_string()),
                    })?
            }
        };
        let client = Client::try_from(kube_config).context(error::InitializationSnafu)?;
        Ok(Self::new(client))
    }
}

impl Debug for KubeGetter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeGetter").finish()
    }
}

#[async_trait::async_trait]
impl ResourceGetter for KubeGetter {
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> std::result::Result<DynamicObject, kube::Error> {
        trace!(
            "GET /apis/{}/namespaces/{}/{}/{}",
            resource.api_version,
            namespace,
            resource.plural,
            name
        );
        let api = Api::<DynamicObject>::namespaced_with(self.client.clone(), namespace, resource);
        api.get(name).await
    }
}
