use super::{PolicyTargetReference, RouteOptions};
use crate::constants::{KIND_ROUTE_OPTION, PLURAL_ROUTE_OPTION};
use crate::crd::gateway_solo_io_v1_kind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

gateway_solo_io_v1_kind!(
    /// `gateway.solo.io/v1` `RouteOption`: reusable route options.
    RouteOption,
    RouteOptionSpec,
    KIND_ROUTE_OPTION,
    PLURAL_ROUTE_OPTION
);

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteOptionSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RouteOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_refs: Option<Vec<PolicyTargetReference>>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::CrdDocument;
    use serde_json::json;

    #[test]
    fn decode_target_refs() {
        let doc = CrdDocument::<RouteOptionSpec>::from_value(json!({
            "kind": "RouteOption",
            "metadata": { "name": "faults", "namespace": "default" },
            "spec": {
                "targetRefs": [{
                    "group": "gateway.networking.k8s.io",
                    "kind": "HTTPRoute",
                    "name": "example-route"
                }],
                "options": { "faults": { "delay": { "percentage": 50.0, "fixedDelay": "2s" } } }
            }
        }))
        .unwrap();
        let spec = doc.spec.unwrap();
        let target = &spec.target_refs.unwrap()[0];
        assert_eq!(target.kind.as_deref(), Some("HTTPRoute"));
        assert_eq!(target.namespace, None);
        let delay = spec.options.unwrap().faults.unwrap().delay.unwrap();
        assert_eq!(delay.fixed_delay.as_deref(), Some("2s"));
    }
}
