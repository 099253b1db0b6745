/*!

Typed trees of the `gateway.solo.io/v1` custom resources. Every field is optional; validation is
left to the Kubernetes API server. Subtrees shared between kinds (references, SSL configuration,
matchers, routes and options) live in their own modules.

!*/

mod common;
mod gateway;
mod matchable_http_gateway;
mod matchable_tcp_gateway;
mod matchers;
mod options;
mod route;
mod route_option;
mod route_table;
mod ssl;
mod virtual_host_option;
mod virtual_service;

pub use common::{
    CidrRange, HeaderValue, HeaderValueOption, LabelExpression, PolicyTargetReference,
    ResourceRef, Selector,
};
pub use gateway::{
    DelegatedHttpGateway, DelegatedTcpGateway, Gateway, GatewaySpec, HttpGateway, HybridGateway,
    MatchedGateway, MatchedGatewayMatcher, RouteConfigurationOptions, TcpGateway, TcpHost,
    TcpHostDestination, VirtualServiceExpressions,
};
pub use matchable_http_gateway::{
    MatchableHttpGateway, MatchableHttpGatewayMatcher, MatchableHttpGatewaySpec,
};
pub use matchable_tcp_gateway::{
    MatchableTcpGateway, MatchableTcpGatewayMatcher, MatchableTcpGatewaySpec,
};
pub use matchers::{HeaderMatcher, Matcher, QueryParameterMatcher};
pub use options::{
    AccessLog, AccessLoggingService, BufferPerRoute, BufferSettings, Cors, CustomAuth, Delay,
    ExtAuthExtension, Extauth, FaultAbort, Faults, FileSink, GrpcService, GrpcWeb, HashPolicy,
    HashPolicyCookie, HeaderManipulation, HealthCheck, HttpConnectionManagerSettings,
    HttpListenerOptions, ListenerOptions, LoadBalancerHash, MaxStreamDuration,
    RateLimitConfigRefs, RateLimitServerSettings, RetryBackOff, RetryPolicy, RouteOptions,
    SocketOption, TcpListenerOptions, TcpProxySettings, VirtualHostOptions, WebSocketSettings,
    WebSocketUpgrade,
};
pub use route::{
    ConsulServiceDestination, DelegateAction, Destination, DirectResponseAction,
    DynamicForwardProxy, KubernetesServiceDestination, MultiDestination, OptionsConfigRefs,
    RedirectAction, RegexMatcher, RegexRewrite, Route, RouteAction, Subset, WeightedDestination,
};
pub use route_option::{RouteOption, RouteOptionSpec};
pub use route_table::{RouteTable, RouteTableSpec};
pub use ssl::{CipherParameters, SdsConfig, SslConfig, SslFiles};
pub use virtual_host_option::{VirtualHostOption, VirtualHostOptionSpec};
pub use virtual_service::{VirtualHost, VirtualService, VirtualServiceSpec};
