/*!

Data sources and the request/response types of their lifecycle. The types mirror the ones a
Terraform plugin framework hands to a data source: a data source is named by `metadata`, described
by `schema`, given the provider's data by `configure` and asked to fill in its state by `read`.

!*/

mod crd;
mod manifest;
mod models;

pub use crd::CrdDataSource;
pub use manifest::CrdManifestDataSource;
pub use models::{DataSourceModel, ManifestModel, MetadataModel};

use crate::schema::{to_snake_case, Schema};
use crate::{Config, Diagnostics, ProviderData, State};
use model::CrdKind;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRequest {
    pub provider_type_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataResponse {
    pub type_name: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigureRequest {
    /// `None` until the provider itself has been configured.
    pub provider_data: Option<Arc<ProviderData>>,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigureResponse {
    pub diagnostics: Diagnostics,
}

#[derive(Debug, Clone, Default)]
pub struct ReadRequest {
    pub config: Config,
}

/// The outcome of a read. `state` is only set when `diagnostics` has no errors.
#[derive(Debug, Clone, Default)]
pub struct ReadResponse {
    pub state: State,
    pub diagnostics: Diagnostics,
}

#[async_trait::async_trait]
pub trait DataSource: Send + Sync {
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse;

    fn schema(&self) -> Schema;

    fn configure(&mut self, request: &ConfigureRequest) -> ConfigureResponse;

    async fn read(&self, request: &ReadRequest) -> ReadResponse;

    /// Checks the configuration against the schema before `configure` and `read` are called.
    fn validate_config(&self, config: &Config) -> Diagnostics {
        self.schema().validate(config.raw())
    }
}

/// The part of a data source type name that follows the provider name, e.g.
/// `gateway_solo_io_virtual_service_v1`.
pub fn type_name_suffix<K>() -> String
where
    K: CrdKind,
{
    format!(
        "{}_{}_{}",
        K::GROUP.replace(|c: char| c == '.' || c == '-', "_"),
        to_snake_case(K::KIND),
        K::VERSION
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use model::gateway::{MatchableHttpGateway, VirtualService};

    #[test]
    fn type_name_suffixes() {
        assert_eq!(
            type_name_suffix::<VirtualService>(),
            "gateway_solo_io_virtual_service_v1"
        );
        assert_eq!(
            type_name_suffix::<MatchableHttpGateway>(),
            "gateway_solo_io_matchable_http_gateway_v1"
        );
    }
}
