use super::{CidrRange, HttpGateway, SslConfig};
use crate::constants::{KIND_MATCHABLE_HTTP_GATEWAY, PLURAL_MATCHABLE_HTTP_GATEWAY};
use crate::crd::gateway_solo_io_v1_kind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

gateway_solo_io_v1_kind!(
    /// `gateway.solo.io/v1` `MatchableHttpGateway`: an HTTP gateway picked up by a hybrid
    /// gateway's `delegatedHttpGateways`.
    MatchableHttpGateway,
    MatchableHttpGatewaySpec,
    KIND_MATCHABLE_HTTP_GATEWAY,
    PLURAL_MATCHABLE_HTTP_GATEWAY
);

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchableHttpGatewaySpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matcher: Option<MatchableHttpGatewayMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_gateway: Option<HttpGateway>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchableHttpGatewayMatcher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_config: Option<SslConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_prefix_ranges: Option<Vec<CidrRange>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passthrough_cipher_suites: Option<Vec<String>>,
}
