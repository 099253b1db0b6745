/// Helper macro to avoid retyping the API group of the gateway CRDs when creating further string
/// constants from it. When given no parameters, this returns the group. When given a string literal
/// parameter it adds `/parameter` to the end.
macro_rules! gateway_solo_io {
    () => {
        "gateway.solo.io"
    };
    ($s:literal) => {
        concat!(gateway_solo_io!(), "/", $s)
    };
}

// API identifiers
pub const GATEWAY_SOLO_IO: &str = gateway_solo_io!();
pub const GATEWAY_SOLO_IO_V1: &str = gateway_solo_io!("v1");
pub const V1: &str = "v1";

// Kinds
pub const KIND_GATEWAY: &str = "Gateway";
pub const KIND_MATCHABLE_HTTP_GATEWAY: &str = "MatchableHttpGateway";
pub const KIND_MATCHABLE_TCP_GATEWAY: &str = "MatchableTcpGateway";
pub const KIND_ROUTE_OPTION: &str = "RouteOption";
pub const KIND_ROUTE_TABLE: &str = "RouteTable";
pub const KIND_VIRTUAL_HOST_OPTION: &str = "VirtualHostOption";
pub const KIND_VIRTUAL_SERVICE: &str = "VirtualService";

// Plural resource names, as used in API paths
pub const PLURAL_GATEWAY: &str = "gateways";
pub const PLURAL_MATCHABLE_HTTP_GATEWAY: &str = "httpgateways";
pub const PLURAL_MATCHABLE_TCP_GATEWAY: &str = "tcpgateways";
pub const PLURAL_ROUTE_OPTION: &str = "routeoptions";
pub const PLURAL_ROUTE_TABLE: &str = "routetables";
pub const PLURAL_VIRTUAL_HOST_OPTION: &str = "virtualhostoptions";
pub const PLURAL_VIRTUAL_SERVICE: &str = "virtualservices";

#[test]
fn gateway_solo_io_constants_macro_test() {
    assert_eq!("gateway.solo.io", gateway_solo_io!());
    assert_eq!("gateway.solo.io/v1", GATEWAY_SOLO_IO_V1);
    assert_eq!("gateway.solo.io/foo", gateway_solo_io!("foo"));
}
