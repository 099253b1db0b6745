use super::{OptionsConfigRefs, Route, SslConfig, VirtualHostOptions};
use crate::constants::{KIND_VIRTUAL_SERVICE, PLURAL_VIRTUAL_SERVICE};
use crate::crd::gateway_solo_io_v1_kind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

gateway_solo_io_v1_kind!(
    /// `gateway.solo.io/v1` `VirtualService`: the routes served for a set of domains.
    VirtualService,
    VirtualServiceSpec,
    KIND_VIRTUAL_SERVICE,
    PLURAL_VIRTUAL_SERVICE
);

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualServiceSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_host: Option<VirtualHost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_config: Option<SslConfig>,
}

/// Routes are evaluated in order; the first match wins.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualHost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<Route>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<VirtualHostOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_config_refs: Option<OptionsConfigRefs>,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::CrdDocument;
    use serde_json::json;

    fn virtual_service_json() -> serde_json::Value {
        json!({
            "apiVersion": "gateway.solo.io/v1",
            "kind": "VirtualService",
            "metadata": { "name": "petstore", "namespace": "gloo-system" },
            "spec": {
                "displayName": "Pet Store",
                "virtualHost": {
                    "domains": ["petstore.example.com"],
                    "routes": [
                        {
                            "matchers": [{
                                "prefix": "/api",
                                "headers": [{ "name": "x-canary", "value": "true" }],
                                "methods": ["GET", "POST"]
                            }],
                            "routeAction": {
                                "single": {
                                    "upstream": { "name": "default-petstore-8080", "namespace": "gloo-system" }
                                }
                            },
                            "options": {
                                "prefixRewrite": "/",
                                "timeout": "15s",
                                "retries": { "retryOn": "5xx", "numRetries": 3 },
                                "faults": { "abort": { "percentage": 2.5, "httpStatus": 503 } },
                                "envoyMetadata": { "envoy.filters.http.lua": { "team": "pets" } }
                            }
                        },
                        {
                            "matchers": [{ "prefix": "/delegated" }],
                            "delegateAction": {
                                "ref": { "name": "pets-routes", "namespace": "team-pets" }
                            }
                        },
                        {
                            "matchers": [{ "exact": "/health" }],
                            "directResponseAction": { "status": 200, "body": "ok" }
                        }
                    ]
                },
                "sslConfig": {
                    "secretRef": { "name": "petstore-tls", "namespace": "gloo-system" },
                    "sniDomains": ["petstore.example.com"]
                }
            }
        })
    }

    #[test]
    fn decode_routes() {
        let doc = CrdDocument::<VirtualServiceSpec>::from_value(virtual_service_json()).unwrap();
        let routes = doc.spec.unwrap().virtual_host.unwrap().routes.unwrap();
        assert_eq!(routes.len(), 3);

        let options = routes[0].options.as_ref().unwrap();
        assert_eq!(options.timeout.as_deref(), Some("15s"));
        assert_eq!(options.retries.as_ref().unwrap().num_retries, Some(3));
        assert_eq!(
            options.faults.as_ref().unwrap().abort.as_ref().unwrap().percentage,
            Some(2.5)
        );

        let delegate = routes[1].delegate_action.as_ref().unwrap();
        assert_eq!(
            delegate.route_table_ref.as_ref().unwrap().name.as_deref(),
            Some("pets-routes")
        );
        assert!(delegate.selector.is_none());

        let direct = routes[2].direct_response_action.as_ref().unwrap();
        assert_eq!(direct.status, Some(200));
    }

    #[test]
    fn round_trip() {
        let doc = CrdDocument::<VirtualServiceSpec>::from_value(virtual_service_json()).unwrap();
        assert_eq!(doc.to_value().unwrap(), virtual_service_json());
    }

    #[test]
    fn yaml_rendering() {
        let doc = CrdDocument::<VirtualServiceSpec>::from_value(virtual_service_json()).unwrap();
        let yaml = doc.to_yaml().unwrap();
        assert!(yaml.contains("kind: VirtualService"));
        assert!(yaml.contains("displayName: Pet Store"));
    }
}
