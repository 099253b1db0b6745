use super::{HeaderValueOption, RegexRewrite, ResourceRef};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Listener-level settings shared by every gateway type.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_logging_service: Option<AccessLoggingService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_connection_buffer_limit_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub socket_options: Option<Vec<SocketOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_protocol: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_balance_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listener_access_logging_service: Option<AccessLoggingService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_stats: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLoggingService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_log: Option<Vec<AccessLog>>,
}

/// One access log sink. Exactly one of `fileSink` and `grpcService` is set.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_sink: Option<FileSink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_service: Option<GrpcService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSink {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub string_format: Option<String>,
    /// Free-form JSON log format; keys are log fields, values are command operators.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_format: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrpcService {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_cluster_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_request_headers_to_log: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_response_headers_to_log: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_state_objects_to_log: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocketOption {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub int_value: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buf_value: Option<String>,
    /// One of `STATE_PREBIND`, `STATE_BOUND` or `STATE_LISTENING`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// HTTP filter settings. Filters without a typed tree here are carried as free-form values.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpListenerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_web: Option<GrpcWeb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_connection_manager_settings: Option<HttpConnectionManagerSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_check: Option<HealthCheck>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extauth: Option<Extauth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit_server: Option<RateLimitServerSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<BufferSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leftmost_xff_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waf: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dlp: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wasm: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caching: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gzip: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_latency: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_json_transcoder: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sanitize_cluster_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_forward_proxy: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_local_ratelimit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_local_ratelimit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub router: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tap: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stateful_session: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_validation_settings: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrpcWeb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpConnectionManagerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_xff_append: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub via: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xff_num_trusted_hops: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_remote_address: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generate_request_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy100_continue: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_idle_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_request_headers_kb: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drain_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accept_http10: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_host_for_http10: Option<String>,
    /// One of `SANITIZE`, `FORWARD_ONLY`, `APPEND_FORWARD`, `SANITIZE_SET` or `ALWAYS_FORWARD_ONLY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub forward_client_cert_details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_external_request_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrades: Option<Vec<WebSocketUpgrade>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connection_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stream_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_header_transformation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_slashes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_path: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers_with_underscores_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_current_client_cert_details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid_request_id_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http2_protocol_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_address_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_with_escaped_slashes_action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_chunked_length: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_trailers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proper_case_header_key_format: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preserve_case_header_key_format: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_headers_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_http_protocol_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_protocol_options: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub early_header_manipulation: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_any_host_port: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_x_forwarded_port: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSocketUpgrade {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub websocket: Option<WebSocketSettings>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSocketSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Listener-wide external authorization server settings.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Extauth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extauthz_server_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_mode_allow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clear_route_cache: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_on_error: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stat_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_service: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_service: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_stage: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitServerSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit_server_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deny_on_fail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_before_auth: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_service: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_x_ratelimit_headers: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_request_bytes: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpListenerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tcp_proxy_settings: Option<TcpProxySettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_limit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_ratelimit: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TcpProxySettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_connect_attempts: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_log_flush_interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunneling_config: Option<Value>,
}

/// Options applied to every route of a virtual host.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHostOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_manipulation: Option<HeaderManipulation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<Cors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<RetryPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extauth: Option<ExtAuthExtension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_configs: Option<RateLimitConfigRefs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_per_route: Option<BufferPerRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_request_attempt_count: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_attempt_count_in_response: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit_basic: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit_early: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_early_configs: Option<RateLimitConfigRefs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit_regular: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_regular_configs: Option<RateLimitConfigRefs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waf: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_staged: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rbac: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dlp: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors_policy_merge_settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staged_transformations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_proc: Option<Value>,
}

/// Options applied to a single route. Enterprise policy subtrees such as `jwt`, `rbac`, `waf` and
/// `stagedTransformations` are kept as free-form values.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex_rewrite: Option<RegexRewrite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idle_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<RetryPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_host_rewrite: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_rewrite_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_x_forwarded_host: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_manipulation: Option<HeaderManipulation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cors: Option<Cors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faults: Option<Faults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upgrades: Option<Vec<WebSocketUpgrade>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lb_hash: Option<LoadBalancerHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stream_duration: Option<MaxStreamDuration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extauth: Option<ExtAuthExtension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_configs: Option<RateLimitConfigRefs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_per_route: Option<BufferPerRoute>,
    /// Filter metadata passed through to Envoy, keyed by filter name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envoy_metadata: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transformations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadowing: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_rewrite_path_regex: Option<RegexRewrite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit_basic: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit_early: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_early_configs: Option<RateLimitConfigRefs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ratelimit_regular: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_regular_configs: Option<RateLimitConfigRefs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waf: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_staged: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_providers_staged: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rbac: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dlp: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub csrf: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staged_transformations: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext_proc: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderManipulation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers_to_add: Option<Vec<HeaderValueOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers_to_remove: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_headers_to_add: Option<Vec<HeaderValueOption>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_headers_to_remove: Option<Vec<String>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_origin: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_origin_regex: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_methods: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expose_headers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_age: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_for_route: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_on: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_retries: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_try_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_back_off: Option<RetryBackOff>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_priorities: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryBackOff {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interval: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub abort: Option<FaultAbort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<Delay>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FaultAbort {
    /// Percentage of requests to abort, from 0 to 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_delay: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerHash {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash_policies: Option<Vec<HashPolicy>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashPolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<HashPolicyCookie>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HashPolicyCookie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxStreamDuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stream_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_timeout_header_max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grpc_timeout_header_offset: Option<String>,
}

/// Per-host or per-route external authorization. Exactly one of the fields is set.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtAuthExtension {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_auth: Option<CustomAuth>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAuth {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_extensions: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimitConfigRefs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<Vec<ResourceRef>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferPerRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer: Option<BufferSettings>,
}
