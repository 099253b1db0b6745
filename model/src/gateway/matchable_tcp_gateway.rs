use super::{CidrRange, SslConfig, TcpGateway};
use crate::constants::{KIND_MATCHABLE_TCP_GATEWAY, PLURAL_MATCHABLE_TCP_GATEWAY};
use crate::crd::gateway_solo_io_v1_kind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

gateway_solo_io_v1_kind!(
    /// `gateway.solo.io/v1` `MatchableTcpGateway`: a TCP gateway picked up by a hybrid gateway's
    /// `delegatedTcpGateways`.
    MatchableTcpGateway,
    MatchableTcpGatewaySpec,
    KIND_MATCHABLE_TCP_GATEWAY,
    PLURAL_MATCHABLE_TCP_GATEWAY
);

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchableTcpGatewaySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matcher: Option<MatchableTcpGatewayMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_gateway: Option<TcpGateway>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchableTcpGatewayMatcher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_config: Option<SslConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_prefix_ranges: Option<Vec<CidrRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passthrough_cipher_suites: Option<Vec<String>>,
}
