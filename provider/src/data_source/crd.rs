use super::models::{id_attribute, metadata_attribute};
use super::{
    type_name_suffix, ConfigureRequest, ConfigureResponse, DataSource, DataSourceModel,
    MetadataRequest, MetadataResponse, ReadRequest, ReadResponse,
};
use crate::client::{HttpStatusCode, ResourceGetter};
use crate::schema::{nested_attributes_for, Attribute, AttributeKind, AttributeMode, Schema};
use log::debug;
use model::{CrdDocument, CrdKind};
use std::marker::PhantomData;
use std::sync::Arc;

/// A read-only data source for one kind of custom resource. `read` fetches the object named in
/// the configuration and writes its labels, annotations and spec into state.
#[derive(Debug)]
pub struct CrdDataSource<K> {
    getter: Option<Arc<dyn ResourceGetter>>,
    kind: PhantomData<K>,
}

impl<K> Default for CrdDataSource<K> {
    fn default() -> Self {
        Self {
            getter: None,
            kind: PhantomData,
        }
    }
}

impl<K> CrdDataSource<K>
where
    K: CrdKind,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxed() -> Box<dyn DataSource> {
        Box::new(Self::new())
    }

    pub fn type_name_suffix() -> String {
        type_name_suffix::<K>()
    }
}

#[async_trait::async_trait]
impl<K> DataSource for CrdDataSource<K>
where
    K: CrdKind,
{
    fn metadata(&self, request: &MetadataRequest) -> MetadataResponse {
        MetadataResponse {
            type_name: format!("{}_{}", request.provider_type_name, Self::type_name_suffix()),
        }
    }

    fn schema(&self) -> Schema {
        Schema::new(format!(
            "Reads a {} object from the {} API.",
            K::KIND,
            K::api_version()
        ))
        .with_attribute("id", id_attribute())
        .with_attribute(
            "api_version",
            Attribute::computed_string().with_description(format!(
                "The versioned schema of this representation of an object, always '{}'.",
                K::api_version()
            )),
        )
        .with_attribute(
            "kind",
            Attribute::computed_string().with_description(format!(
                "The kind of the object, always '{}'.",
                K::KIND
            )),
        )
        .with_attribute("metadata", metadata_attribute(AttributeMode::Computed))
        .with_attribute(
            "spec",
            Attribute::new(
                AttributeKind::SingleNested(nested_attributes_for::<K::Spec>(
                    AttributeMode::Computed,
                )),
                AttributeMode::Computed,
            )
            .with_description(format!("The desired state of the {}.", K::KIND)),
        )
    }

    fn configure(&mut self, request: &ConfigureRequest) -> ConfigureResponse {
        let mut response = ConfigureResponse::default();
        // the provider has not been configured yet
        let provider_data = match &request.provider_data {
            None => return response,
            Some(provider_data) => provider_data,
        };
        if provider_data.offline {
            response.diagnostics.add_error(
                "Provider in offline mode",
                format!(
                    "The {} data source reads from a Kubernetes cluster and cannot be used while \
                    the provider is in offline mode.",
                    K::KIND
                ),
            );
            return response;
        }
        match &provider_data.getter {
            Some(getter) => self.getter = Some(Arc::clone(getter)),
            None => response.diagnostics.add_error(
                "Unconfigured client",
                "The provider is online but has no Kubernetes client.",
            ),
        }
        response
    }

    async fn read(&self, request: &ReadRequest) -> ReadResponse {
        let mut response = ReadResponse::default();
        let mut data: DataSourceModel = match request.config.get(&mut response.diagnostics) {
            None => return response,
            Some(data) => data,
        };
        let getter = match &self.getter {
            None => {
                response.diagnostics.add_error(
                    "Unconfigured client",
                    "Expected a configured Kubernetes client. Please report this issue to the \
                    provider developers.",
                );
                return response;
            }
            Some(getter) => getter,
        };

        let name = data.metadata.name.clone();
        let namespace = data.metadata.namespace.clone();
        debug!(
            "Reading {} '{}' in namespace '{}'",
            K::api_resource().plural,
            name,
            namespace
        );

        let object = match getter.get(&K::api_resource(), &namespace, &name).await {
            Ok(object) => object,
            Err(e) => {
                let detail = if e.is_not_found() {
                    format!(
                        "{} '{}' does not exist in namespace '{}': {}",
                        K::KIND,
                        name,
                        namespace,
                        e
                    )
                } else {
                    format!(
                        "An unexpected error occurred while reading {} '{}' in namespace '{}': {}",
                        K::KIND,
                        name,
                        namespace,
                        e
                    )
                };
                response
                    .diagnostics
                    .add_error("Unable to GET resource", detail);
                return response;
            }
        };

        let value = match serde_json::to_value(&object) {
            Ok(value) => value,
            Err(e) => {
                response.diagnostics.add_error(
                    "Unable to marshal response",
                    format!("The response for {} '{}' is not valid JSON: {}", K::KIND, name, e),
                );
                return response;
            }
        };
        let document = match CrdDocument::<K::Spec>::from_value(value) {
            Ok(document) => document,
            Err(e) => {
                response.diagnostics.add_error(
                    "Unable to unmarshal resource",
                    format!(
                        "The response for {} '{}' does not match its schema: {}",
                        K::KIND,
                        name,
                        e
                    ),
                );
                return response;
            }
        };
        let spec = match document.spec.as_ref().map(serde_json::to_value).transpose() {
            Ok(spec) => spec,
            Err(e) => {
                response.diagnostics.add_error(
                    "Unable to marshal response",
                    format!("The spec of {} '{}' cannot be encoded: {}", K::KIND, name, e),
                );
                return response;
            }
        };

        let spec_attributes = nested_attributes_for::<K::Spec>(AttributeMode::Computed);
        data.id = Some(data.metadata.id());
        data.api_version = Some(K::api_version());
        data.kind = Some(K::KIND.to_string());
        data.metadata.labels = document.metadata.labels;
        data.metadata.annotations = document.metadata.annotations;
        data.spec = spec.map(|spec| spec_attributes.document_to_state(&spec));

        let diagnostics = response.state.set(&data);
        response.diagnostics.append(diagnostics);
        response
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Config, ProviderData};
    use model::gateway::VirtualService;
    use serde_json::json;

    #[test]
    fn schema_attributes() {
        let schema = CrdDataSource::<VirtualService>::new().schema();
        let names: Vec<&str> = schema.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["api_version", "id", "kind", "metadata", "spec"]);
        assert!(schema.attributes["spec"].is_computed_only());
        assert_eq!(schema.attributes["metadata"].mode, AttributeMode::Required);
    }

    #[test]
    fn configure_without_provider_data() {
        let mut data_source = CrdDataSource::<VirtualService>::new();
        let response = data_source.configure(&ConfigureRequest::default());
        assert!(response.diagnostics.is_empty());
        assert!(data_source.getter.is_none());
    }

    #[test]
    fn configure_offline() {
        let mut data_source = CrdDataSource::<VirtualService>::new();
        let response = data_source.configure(&ConfigureRequest {
            provider_data: Some(Arc::new(ProviderData::offline())),
        });
        assert_eq!(response.diagnostics.len(), 1);
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            "Provider in offline mode"
        );
        assert!(data_source.getter.is_none());
    }

    #[tokio::test]
    async fn read_without_client() {
        let data_source = CrdDataSource::<VirtualService>::new();
        let response = data_source
            .read(&ReadRequest {
                config: Config::new(json!({
                    "metadata": { "name": "petstore", "namespace": "default" }
                })),
            })
            .await;
        assert!(response.state.is_null());
        assert_eq!(
            response.diagnostics.iter().next().unwrap().summary,
            "Unconfigured client"
        );
    }
}
