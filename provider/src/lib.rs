/*!

This library exposes Kubernetes custom resources as read-only Terraform data sources. Each data
source follows the same lifecycle: `metadata` names it, `schema` declares its attributes,
`configure` hands it the shared Kubernetes client and `read` fetches one object and writes it into
Terraform state.

The data sources are generic over [`model::CrdKind`], so a single implementation serves every
custom resource kind in the `model` crate.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub use config::ProviderConfig;
pub use diagnostics::{AttributePath, Diagnostic, Diagnostics, Severity};
pub use provider::{ConfigureProviderResponse, K8sProvider, ProviderData, PROVIDER_TYPE_NAME};
pub use state::{Config, State};

pub mod client;
mod config;
pub mod data_source;
mod diagnostics;
mod provider;
pub mod registry;
pub mod schema;
mod state;
pub mod validators;
