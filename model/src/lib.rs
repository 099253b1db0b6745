/*!

This library provides the typed trees of the Kubernetes custom resources exposed by the provider,
along with the `CrdKind` trait that ties each tree to its group, version, kind and plural name.

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

pub use crd::{CrdDocument, CrdKind, DocumentMetadata};
pub use error::{Error, Result};

pub mod constants;
mod crd;
mod error;
pub mod gateway;
