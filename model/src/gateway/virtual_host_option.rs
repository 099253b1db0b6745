use super::{PolicyTargetReference, VirtualHostOptions};
use crate::constants::{KIND_VIRTUAL_HOST_OPTION, PLURAL_VIRTUAL_HOST_OPTION};
use crate::crd::gateway_solo_io_v1_kind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

gateway_solo_io_v1_kind!(
    /// `gateway.solo.io/v1` `VirtualHostOption`: reusable virtual host options.
    VirtualHostOption,
    VirtualHostOptionSpec,
    KIND_VIRTUAL_HOST_OPTION,
    PLURAL_VIRTUAL_HOST_OPTION
);

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHostOptionSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<VirtualHostOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_refs: Option<Vec<PolicyTargetReference>>,
}
