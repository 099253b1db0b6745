use super::{
    CidrRange, Destination, HttpListenerOptions, LabelExpression, ListenerOptions,
    MultiDestination, ResourceRef, Selector, SslConfig, TcpListenerOptions,
};
use crate::constants::{KIND_GATEWAY, PLURAL_GATEWAY};
use crate::crd::gateway_solo_io_v1_kind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

gateway_solo_io_v1_kind!(
    /// `gateway.solo.io/v1` `Gateway`: a listener on the proxy and the gateway type it serves.
    Gateway,
    GatewaySpec,
    KIND_GATEWAY,
    PLURAL_GATEWAY
);

/// Exactly one of `httpGateway`, `tcpGateway` and `hybridGateway` is set.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewaySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind_port: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_proxy_proto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<ListenerOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_options: Option<RouteConfigurationOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_gateway: Option<HttpGateway>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_gateway: Option<TcpGateway>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hybrid_gateway: Option<HybridGateway>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteConfigurationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_direct_response_body_size_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_specific_header_mutations_wins: Option<bool>,
}

/// Selects the virtual services served by an HTTP listener. With no selection at all, every
/// virtual service in the gateway's namespaces is served.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpGateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_services: Option<Vec<ResourceRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_service_selector: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_service_expressions: Option<VirtualServiceExpressions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_service_namespaces: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<HttpListenerOptions>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceExpressions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expressions: Option<Vec<LabelExpression>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpGateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_hosts: Option<Vec<TcpHost>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<TcpListenerOptions>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpHost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<TcpHostDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_config: Option<SslConfig>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpHostDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi: Option<MultiDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_group: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_sni_cluster_name: Option<bool>,
}

/// Serves several gateway types from one listener, picked per connection by `matcher`.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HybridGateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_gateways: Option<Vec<MatchedGateway>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegated_http_gateways: Option<DelegatedHttpGateway>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegated_tcp_gateways: Option<DelegatedTcpGateway>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedGateway {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matcher: Option<MatchedGatewayMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_gateway: Option<HttpGateway>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_gateway: Option<TcpGateway>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedGatewayMatcher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_config: Option<SslConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_prefix_ranges: Option<Vec<CidrRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passthrough_cipher_suites: Option<Vec<String>>,
}

/// Picks `MatchableHttpGateway` objects by reference or by selector.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatedHttpGateway {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub gateway_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevent_child_overrides: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegatedTcpGateway {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub gateway_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
}
