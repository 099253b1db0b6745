use snafu::Snafu;
use std::path::PathBuf;

/// The `Result` type returned by `client`.
pub type Result<T> = std::result::Result<T, Error>;

/// The public error type returned by `client`.
#[derive(Debug, Snafu)]
pub struct Error(InnerError);

/// The private error type returned by `client`.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub(super) enum InnerError {
    #[snafu(display("Unable to read kubeconfig '{}': {}", path.display(), source))]
    KubeconfigRead {
        path: PathBuf,
        source: kube::config::KubeconfigError,
    },

    #[snafu(display("Unable to read the default kubeconfig: {}", source))]
    KubeconfigDefault {
        source: kube::config::KubeconfigError,
    },

    #[snafu(display("Unable to load kubeconfig context '{}': {}", context, source))]
    KubeconfigContext {
        context: String,
        source: kube::config::KubeconfigError,
    },

    #[snafu(display("Unable to infer the Kubernetes configuration: {}", source))]
    ConfigInfer {
        source: kube::config::InferConfigError,
    },

    #[snafu(display("Error initializing the Kubernetes client: {}", source))]
    Initialization { source: kube::Error },
}
