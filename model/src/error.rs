use snafu::Snafu;

#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display("Error deserializing {} document: {}", kind, source))]
    DocumentDeserialization {
        kind: String,
        source: serde_json::Error,
    },

    #[snafu(display("Error serializing {} document: {}", kind, source))]
    DocumentSerialization {
        kind: String,
        source: serde_json::Error,
    },

    #[snafu(display("Error rendering {} document as YAML: {}", kind, source))]
    YamlSerialization {
        kind: String,
        source: serde_yaml::Error,
    },
}
