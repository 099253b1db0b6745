/*!

The Kubernetes side of the provider. Data sources only need to GET a single object, so they
depend on the narrow [`ResourceGetter`] trait rather than on `kube::Client` directly. This is what
allows tests to substitute a mock getter.

!*/

mod error;
mod http_status_code;
mod kube_getter;

pub use error::{Error, Result};
pub use http_status_code::{HttpStatusCode, StatusCode};
pub use kube_getter::KubeGetter;

use kube::core::{ApiResource, DynamicObject};
use std::fmt::Debug;

/// Fetches a single namespaced object of any kind.
#[async_trait::async_trait]
pub trait ResourceGetter: Debug + Send + Sync {
    /// Performs one GET for the object `name` in `namespace`. Errors are returned exactly as
    /// kube reports them.
    async fn get(
        &self,
        resource: &ApiResource,
        namespace: &str,
        name: &str,
    ) -> std::result::Result<DynamicObject, kube::Error>;
}
