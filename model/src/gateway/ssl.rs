use super::ResourceRef;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// TLS termination settings. Certificates come from exactly one of `secretRef`, `sslFiles` or
/// `sds`.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SslConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_files: Option<SslFiles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sds: Option<SdsConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sni_domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_subject_alt_name: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<CipherParameters>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpn_protocols: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_way_tls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_tls_session_resumption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_socket_connect_timeout: Option<String>,
    /// One of `LENIENT_STAPLING`, `STRICT_STAPLING` or `MUST_STAPLE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocsp_staple_policy: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SslFiles {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_cert: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_ca: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocsp_staple: Option<String>,
}

/// Secret discovery service settings.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SdsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificates_secret_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_context_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_credentials: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CipherParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_protocol_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_protocol_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_suites: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecdh_curves: Option<Vec<String>>,
}
