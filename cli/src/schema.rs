use anyhow::{Context, Result};
use clap::Parser;
use provider::K8sProvider;

/// Print a schema as JSON.
#[derive(Debug, Parser)]
pub(crate) struct Schema {
    /// The data source type name. Prints the provider schema when omitted.
    type_name: Option<String>,
}

impl Schema {
    pub(crate) fn run(self, provider: &K8sProvider) -> Result<()> {
        let schema = match &self.type_name {
            None => provider.schema(),
            Some(type_name) => provider
                .data_source(type_name)
                .with_context(|| format!("The provider has no data source named '{}'", type_name))?
                .schema(),
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&schema).context("Could not create string from schema.")?
        );
        Ok(())
    }
}
