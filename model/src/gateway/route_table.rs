use super::Route;
use crate::constants::{KIND_ROUTE_TABLE, PLURAL_ROUTE_TABLE};
use crate::crd::gateway_solo_io_v1_kind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

gateway_solo_io_v1_kind!(
    /// `gateway.solo.io/v1` `RouteTable`: routes delegated to by a virtual service or another
    /// route table.
    RouteTable,
    RouteTableSpec,
    KIND_ROUTE_TABLE,
    PLURAL_ROUTE_TABLE
);

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteTableSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Route>>,
    /// Orders route tables picked by the same delegate selector; lower weights come first.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}
