use anyhow::{Context, Result};
use clap::Parser;
use provider::data_source::MetadataRequest;
use provider::K8sProvider;
use serde::Serialize;
use tabled::{Alignment, Full, MaxWidth, MinWidth, Modify, Style, Table, Tabled};
use terminal_size::{Height, Width};

/// List the data sources of the provider.
#[derive(Debug, Parser)]
pub(crate) struct List {
    /// Output the list in JSON format.
    #[clap(long = "json")]
    json: bool,
}

#[derive(Tabled, Clone, Serialize)]
struct DataSourceRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

impl List {
    pub(crate) fn run(self, provider: &K8sProvider) -> Result<()> {
        let request = MetadataRequest {
            provider_type_name: provider.type_name().to_string(),
        };
        let mut rows: Vec<DataSourceRow> = provider
            .data_sources()
            .iter()
            .map(|data_source| DataSourceRow {
                name: data_source.metadata(&request).type_name,
                description: data_source.schema().description,
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&rows)
                    .context("Could not create string from data sources.")?
            );
        } else {
            let (terminal_size::Width(width), _) =
                terminal_size::terminal_size().unwrap_or((Width(120), Height(0)));
            let width = width as usize;
            let table = Table::new(rows)
                .with(Style::blank())
                .with(Modify::new(Full).with(Alignment::left()))
                .with(MaxWidth::truncating(width))
                .with(MinWidth::new(width))
                .to_string();
            println!("{}", table);
        }
        Ok(())
    }
}
