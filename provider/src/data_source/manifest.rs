use super::models::{id_attribute, metadata_attribute};
use super::{
    type_name_suffix, ConfigureRequest, ConfigureResponse, DataSource, ManifestModel,
    MetadataRequest, MetadataResponse, ReadRequest, ReadResponse,
};
use crate::schema::{nested_attributes_for, Attribute, AttributeKind, AttributeMode, Schema};
use log::debug;
use model::{CrdKind, DocumentMetadata};
use std::marker::PhantomData;

/// Renders a custom resource from configuration as a Kubernetes YAML manifest. It does not talk
/// to a cluster, so it works with the provider in offline mode.
#[derive(Debug)]
pub struct CrdManifestDataSource<K> {
    kind: PhantomData<K>,
}

impl<K> Default for CrdManifestDataSource<K> {
    fn default() -> Self {
        Self { kind: PhantomData }
    }
}

impl<K> CrdManifestDataSource<K>
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
        format!("{}_manifest", type_name_suffix::<K>())
    }
}

#[async_trait::async_trait]
impl<K> DataSource for CrdManifestDataSource<K>
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
            "Renders a {} object of the {} API as a YAML manifest.",
            K::KIND,
            K::api_version()
        ))
        .with_attribute("id", id_attribute())
        .with_attribute("metadata", metadata_attribute(AttributeMode::Optional))
        .with_attribute(
            "spec",
            Attribute::new(
                AttributeKind::SingleNested(nested_attributes_for::<K::Spec>(
                    AttributeMode::Optional,
                )),
                AttributeMode::Optional,
            )
            .with_description(format!("The desired state of the {}.", K::KIND)),
        )
        .with_attribute(
            "yaml",
            Attribute::computed_string().with_description("The rendered manifest."),
        )
    }

    fn configure(&mut self, _request: &ConfigureRequest) -> ConfigureResponse {
        ConfigureResponse::default()
    }

    async fn read(&self, request: &ReadRequest) -> ReadResponse {
        let mut response = ReadResponse::default();
        let mut data: ManifestModel = match request.config.get(&mut response.diagnostics) {
            None => return response,
            Some(data) => data,
        };
        debug!(
            "Rendering {} '{}' in namespace '{}'",
            K::KIND,
            data.metadata.name,
            data.metadata.namespace
        );

        let spec_attributes = nested_attributes_for::<K::Spec>(AttributeMode::Optional);
        let spec = data
            .spec
            .as_ref()
            .map(|spec| serde_json::from_value::<K::Spec>(spec_attributes.state_to_document(spec)))
            .transpose();
        let spec = match spec {
            Ok(spec) => spec,
            Err(e) => {
                response.diagnostics.add_error(
                    "Unable to render manifest",
                    format!("The spec does not match the {} schema: {}", K::KIND, e),
                );
                return response;
            }
        };

        let metadata = DocumentMetadata {
            labels: data.metadata.labels.clone(),
            annotations: data.metadata.annotations.clone(),
            ..DocumentMetadata::new(data.metadata.name.as_str(), data.metadata.namespace.as_str())
        };
        let yaml = match K::document(metadata, spec).to_yaml() {
            Ok(yaml) => yaml,
            Err(e) => {
                response
                    .diagnostics
                    .add_error("Unable to render manifest", e.to_string());
                return response;
            }
        };

        data.id = Some(data.metadata.id());
        data.yaml = Some(yaml);
        let diagnostics = response.state.set(&data);
        response.diagnostics.append(diagnostics);
        response
    }
}
