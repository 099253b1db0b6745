//! Every data source the provider serves.

use crate::data_source::{CrdDataSource, CrdManifestDataSource, DataSource};
use model::gateway::{
    Gateway, MatchableHttpGateway, MatchableTcpGateway, RouteOption, RouteTable,
    VirtualHostOption, VirtualService,
};
use model::CrdKind;
use std::fmt::{Debug, Formatter};

/// Names and creates one data source. The type name is known without creating the data source,
/// so a lookup builds only the match.
#[derive(Clone, Copy)]
pub struct DataSourceFactory {
    type_name_suffix: fn() -> String,
    create: fn() -> Box<dyn DataSource>,
}

impl DataSourceFactory {
    const fn reader<K: CrdKind>() -> Self {
        Self {
            type_name_suffix: CrdDataSource::<K>::type_name_suffix,
            create: CrdDataSource::<K>::boxed,
        }
    }

    const fn manifest<K: CrdKind>() -> Self {
        Self {
            type_name_suffix: CrdManifestDataSource::<K>::type_name_suffix,
            create: CrdManifestDataSource::<K>::boxed,
        }
    }

    /// The type name the data source reports from `metadata` under `provider_type_name`.
    pub fn type_name(&self, provider_type_name: &str) -> String {
        format!("{}_{}", provider_type_name, (self.type_name_suffix)())
    }

    /// Creates an unconfigured data source.
    pub fn create(&self) -> Box<dyn DataSource> {
        (self.create)()
    }
}

impl Debug for DataSourceFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataSourceFactory")
            .field("type_name_suffix", &(self.type_name_suffix)())
            .finish()
    }
}

const FACTORIES: &[DataSourceFactory] = &[
    DataSourceFactory::reader::<Gateway>(),
    DataSourceFactory::manifest::<Gateway>(),
    DataSourceFactory::reader::<MatchableHttpGateway>(),
    DataSourceFactory::manifest::<MatchableHttpGateway>(),
    DataSourceFactory::reader::<MatchableTcpGateway>(),
    DataSourceFactory::manifest::<MatchableTcpGateway>(),
    DataSourceFactory::reader::<RouteOption>(),
    DataSourceFactory::manifest::<RouteOption>(),
    DataSourceFactory::reader::<RouteTable>(),
    DataSourceFactory::manifest::<RouteTable>(),
    DataSourceFactory::reader::<VirtualHostOption>(),
    DataSourceFactory::manifest::<VirtualHostOption>(),
    DataSourceFactory::reader::<VirtualService>(),
    DataSourceFactory::manifest::<VirtualService>(),
];

pub fn factories() -> &'static [DataSourceFactory] {
    FACTORIES
}

pub fn data_sources() -> Vec<Box<dyn DataSource>> {
    FACTORIES.iter().map(DataSourceFactory::create).collect()
}

#[cfg(test)]
mod test {
    use crate::K8sProvider;
    use std::collections::HashSet;

    #[test]
    fn type_names_are_unique() {
        let names = K8sProvider::new().data_source_type_names();
        assert_eq!(names.len(), 14);
        let unique: HashSet<&String> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
        assert!(names.contains(&"k8s_gateway_solo_io_virtual_service_v1".to_string()));
        assert!(names.contains(&"k8s_gateway_solo_io_matchable_tcp_gateway_v1_manifest".to_string()));
    }

    #[test]
    fn factory_names_match_metadata() {
        let provider = K8sProvider::new();
        let names: Vec<String> = super::factories()
            .iter()
            .map(|factory| factory.type_name(provider.type_name()))
            .collect();
        assert_eq!(names, provider.data_source_type_names());
    }

    #[test]
    fn schemas_are_derived_for_every_kind() {
        for data_source in super::data_sources() {
            let schema = data_source.schema();
            assert!(schema.attributes.contains_key("spec"));
            assert!(schema.attributes.contains_key("metadata"));
        }
    }
}
