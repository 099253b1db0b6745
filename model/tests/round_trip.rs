/*!

Round trips of documents shaped like the Gloo example manifests. Every fixture sets fields from
each top-level option group; a field without a home in the typed tree would be dropped on decode
and break the equality.

!*/

#![recursion_limit = "256"]

use serde_json::{json, Value};
use tfk8s_model::gateway::{
    Gateway, MatchableHttpGateway, MatchableTcpGateway, RouteOption, RouteTable, VirtualHostOption,
    VirtualService,
};
use tfk8s_model::{CrdDocument, CrdKind};

fn assert_round_trip<K: CrdKind>(fixture: Value) -> CrdDocument<K::Spec> {
    let doc = CrdDocument::<K::Spec>::from_value(fixture.clone()).unwrap();
    assert_eq!(doc.to_value().unwrap(), fixture);
    doc
}

fn document(kind: &str, name: &str, spec: Value) -> Value {
    json!({
        "apiVersion": "gateway.solo.io/v1",
        "kind": kind,
        "metadata": { "name": name, "namespace": "gloo-system" },
        "spec": spec
    })
}

fn route_options() -> Value {
    json!({
        "prefixRewrite": "/api/pets",
        "timeout": "20s",
        "retries": {
            "retryOn": "5xx",
            "numRetries": 3,
            "perTryTimeout": "5s",
            "retryBackOff": { "baseInterval": "1s", "maxInterval": "10s" }
        },
        "autoHostRewrite": true,
        "headerManipulation": {
            "requestHeadersToAdd": [{ "header": { "key": "x-gloo", "value": "true" }, "append": false }],
            "responseHeadersToRemove": ["server"]
        },
        "faults": { "abort": { "percentage": 2.5, "httpStatus": 503 } },
        "lbHash": { "hashPolicies": [{ "header": "x-user", "terminal": true }] },
        "extauth": { "configRef": { "name": "oauth", "namespace": "gloo-system" } },
        "rateLimitConfigs": { "refs": [{ "name": "per-user", "namespace": "gloo-system" }] },
        "envoyMetadata": { "envoy.filters.http.lua": { "team": "pets" } },
        "transformations": {
            "requestTransformation": {
                "transformationTemplate": { "headers": { ":path": { "text": "/v2/{{ path }}" } } }
            }
        },
        "stagedTransformations": {
            "regular": {
                "requestTransforms": [{
                    "matcher": { "prefix": "/" },
                    "requestTransformation": { "transformationTemplate": { "passthrough": {} } }
                }]
            }
        },
        "tracing": { "routeDescriptor": "petstore-route", "propagate": true },
        "shadowing": { "upstream": { "name": "petstore-shadow", "namespace": "gloo-system" }, "percentage": 10 },
        "ratelimitBasic": {
            "anonymousLimits": { "requestsPerUnit": 10, "unit": "MINUTE" },
            "authorizedLimits": { "requestsPerUnit": 100, "unit": "MINUTE" }
        },
        "ratelimit": {
            "rateLimits": [{ "actions": [{ "genericKey": { "descriptorValue": "per-route" } }] }]
        },
        "jwt": { "disable": false },
        "jwtStaged": { "afterExtAuth": { "disable": true } },
        "rbac": {
            "policies": {
                "viewer": {
                    "principals": [{ "jwtPrincipal": { "claims": { "sub": "pets" } } }],
                    "permissions": { "pathPrefix": "/api/pets", "methods": ["GET"] }
                }
            }
        },
        "waf": { "customInterventionMessage": "blocked", "ruleSets": [{ "ruleStr": "SecRuleEngine On" }] },
        "dlp": { "actions": [{ "actionType": "SSN" }] },
        "csrf": { "filterEnabled": { "defaultValue": { "numerator": 100, "denominator": "HUNDRED" } } }
    })
}

fn virtual_host_options() -> Value {
    json!({
        "cors": {
            "allowOrigin": ["https://pets.example.com"],
            "allowMethods": ["GET", "POST"],
            "maxAge": "1d"
        },
        "headerManipulation": { "responseHeadersToAdd": [{ "header": { "key": "x-vh", "value": "petstore" } }] },
        "extauth": { "customAuth": { "contextExtensions": { "tier": "gold" } } },
        "includeRequestAttemptCount": true,
        "transformations": { "clearRouteCache": true },
        "stagedTransformations": { "early": { "responseTransforms": [] } },
        "ratelimitBasic": { "anonymousLimits": { "requestsPerUnit": 5, "unit": "SECOND" } },
        "ratelimitEarly": { "rateLimits": [{ "actions": [{ "remoteAddress": {} }] }] },
        "rateLimitRegularConfigs": { "refs": [{ "name": "global", "namespace": "gloo-system" }] },
        "jwt": {
            "providers": {
                "kube": {
                    "issuer": "kubernetes/serviceaccount",
                    "jwks": { "local": { "key": "-----BEGIN PUBLIC KEY-----" } }
                }
            }
        },
        "rbac": { "disable": true },
        "waf": { "disabled": true },
        "dlp": { "enabledFor": "ALL" },
        "csrf": { "additionalOrigins": [{ "exact": "pets.example.com" }] },
        "stats": { "virtualClusters": [{ "name": "pets", "pattern": "/api/pets/.*" }] },
        "extensions": { "configs": { "my-plugin": { "enabled": true } } }
    })
}

#[test]
fn gateway_round_trip() {
    let doc = assert_round_trip::<Gateway>(document(
        "Gateway",
        "gateway-proxy",
        json!({
            "bindAddress": "::",
            "bindPort": 8080,
            "proxyNames": ["gateway-proxy"],
            "useProxyProto": false,
            "options": {
                "accessLoggingService": {
                    "accessLog": [{
                        "fileSink": { "path": "/dev/stdout", "jsonFormat": { "path": "%REQ(:PATH)%" } },
                        "filter": { "statusCodeFilter": { "comparison": { "op": "GE", "value": { "defaultValue": 400 } } } }
                    }]
                },
                "perConnectionBufferLimitBytes": 32768,
                "socketOptions": [{ "description": "keepalive", "level": 1, "name": 9, "intValue": 1, "state": "STATE_LISTENING" }],
                "proxyProtocol": { "allowRequestsWithoutProxyProtocol": true },
                "connectionBalanceConfig": { "exactBalance": {} },
                "tcpStats": true
            },
            "routeOptions": { "maxDirectResponseBodySizeBytes": 4096 },
            "httpGateway": {
                "virtualServiceSelector": { "gateway-type": "public" },
                "options": {
                    "httpConnectionManagerSettings": {
                        "useRemoteAddress": true,
                        "xffNumTrustedHops": 1,
                        "upgrades": [{ "websocket": { "enabled": true } }],
                        "codecType": "AUTO",
                        "tracing": { "verbose": true, "requestHeadersForTags": ["x-request-id"] },
                        "enableTrailers": true
                    },
                    "healthCheck": { "path": "/healthz" },
                    "extauth": {
                        "extauthzServerRef": { "name": "extauth", "namespace": "gloo-system" },
                        "requestBody": { "maxRequestBytes": 1024 },
                        "transportApiVersion": "V3"
                    },
                    "ratelimitServer": {
                        "ratelimitServerRef": { "name": "rate-limit", "namespace": "gloo-system" },
                        "enableXRatelimitHeaders": true
                    },
                    "gzip": { "compressionLevel": "BEST", "contentType": ["application/json"] },
                    "waf": { "ruleSets": [{ "ruleStr": "SecRuleEngine On" }] },
                    "dlp": { "dlpRules": [{ "actions": [{ "actionType": "ALL_CREDIT_CARDS" }] }] },
                    "wasm": { "filters": [{ "name": "add-header", "image": "webassemblyhub.io/pets/add-header:v0.1" }] },
                    "caching": { "cachingServiceRef": { "name": "caching-service", "namespace": "gloo-system" } },
                    "grpcJsonTranscoder": { "protoDescriptorBin": "Cg==", "services": ["pets.PetStore"] },
                    "sanitizeClusterHeader": true,
                    "router": { "suppressEnvoyHeaders": true }
                }
            }
        }),
    ));
    let options = doc.spec.unwrap().http_gateway.unwrap().options.unwrap();
    assert_eq!(options.router, Some(json!({ "suppressEnvoyHeaders": true })));
}

#[test]
fn tcp_gateway_round_trip() {
    assert_round_trip::<Gateway>(document(
        "Gateway",
        "gateway-tcp",
        json!({
            "bindAddress": "::",
            "bindPort": 8000,
            "tcpGateway": {
                "tcpHosts": [{
                    "name": "one",
                    "destination": {
                        "single": { "upstream": { "name": "tcp-echo-1025", "namespace": "gloo-system" } }
                    },
                    "sslConfig": { "secretRef": { "name": "gateway-tls", "namespace": "gloo-system" }, "sniDomains": ["one.com"] }
                }],
                "options": {
                    "tcpProxySettings": { "maxConnectAttempts": 5, "idleTimeout": "60s" },
                    "connectionLimit": { "maxActiveConnections": 100, "delayBeforeClose": "1s" },
                    "localRatelimit": { "maxTokens": 10, "tokensPerFill": 1, "fillInterval": "1s" }
                }
            }
        }),
    ));
}

#[test]
fn virtual_service_round_trip() {
    let doc = assert_round_trip::<VirtualService>(document(
        "VirtualService",
        "petstore",
        json!({
            "displayName": "petstore",
            "sslConfig": {
                "secretRef": { "name": "petstore-tls", "namespace": "gloo-system" },
                "parameters": { "minimumProtocolVersion": "TLSv1_2" }
            },
            "virtualHost": {
                "domains": ["*"],
                "options": virtual_host_options(),
                "routes": [{
                    "matchers": [{
                        "prefix": "/api/pets",
                        "headers": [{ "name": "x-canary", "value": "true" }],
                        "methods": ["GET"]
                    }],
                    "routeAction": {
                        "single": {
                            "upstream": { "name": "default-petstore-8080", "namespace": "gloo-system" },
                            "destinationSpec": { "rest": { "functionName": "findPetById" } }
                        }
                    },
                    "options": route_options()
                }, {
                    "matchers": [{ "exact": "/v1/pets" }],
                    "routeAction": {
                        "multi": {
                            "destinations": [{
                                "weight": 9,
                                "destination": { "kube": { "ref": { "name": "petstore", "namespace": "default" }, "port": 8080 } }
                            }, {
                                "weight": 1,
                                "destination": { "upstream": { "name": "petstore-v2", "namespace": "gloo-system" } },
                                "options": { "headerManipulation": { "requestHeadersToAdd": [{ "header": { "key": "x-v2", "value": "1" } }] } }
                            }]
                        }
                    }
                }, {
                    "matchers": [{ "regex": "/old/.*" }],
                    "redirectAction": { "hostRedirect": "pets.example.com", "httpsRedirect": true }
                }]
            }
        }),
    ));
    let route = &doc.spec.unwrap().virtual_host.unwrap().routes.unwrap()[0];
    let options = route.options.as_ref().unwrap();
    assert_eq!(options.jwt, Some(json!({ "disable": false })));
    assert!(options.staged_transformations.is_some());
    assert!(options.shadowing.is_some());
    assert!(options.ratelimit_basic.is_some());
}

#[test]
fn route_table_round_trip() {
    assert_round_trip::<RouteTable>(document(
        "RouteTable",
        "a-routes",
        json!({
            "weight": 20,
            "routes": [{
                "name": "delegated",
                "matchers": [{ "prefix": "/a/1" }],
                "inheritableMatchers": true,
                "delegateAction": {
                    "selector": { "namespaces": ["team-a"], "labels": { "domain": "a" } }
                }
            }, {
                "matchers": [{ "prefix": "/a/2" }],
                "directResponseAction": { "status": 200, "body": "ok" },
                "options": { "transformations": { "clearRouteCache": true }, "tracing": { "routeDescriptor": "a-2" } }
            }, {
                "matchers": [{ "prefix": "/a/3" }],
                "routeAction": { "single": { "upstream": { "name": "a-3", "namespace": "gloo-system" } } },
                "optionsConfigRefs": { "delegateOptions": [{ "name": "shared-route-options", "namespace": "gloo-system" }] }
            }]
        }),
    ));
}

#[test]
fn matchable_http_gateway_round_trip() {
    assert_round_trip::<MatchableHttpGateway>(document(
        "MatchableHttpGateway",
        "public-http",
        json!({
            "matcher": {
                "sourcePrefixRanges": [{ "addressPrefix": "10.0.0.0", "prefixLen": 8 }],
                "sslConfig": { "sds": { "targetUri": "127.0.0.1:8234", "certificatesSecretName": "gateway-tls" } }
            },
            "httpGateway": {
                "virtualServiceNamespaces": ["team-a"],
                "options": {
                    "grpcWeb": { "disable": true },
                    "buffer": { "maxRequestBytes": 65536 },
                    "csrf": { "filterEnabled": { "defaultValue": { "numerator": 100 } } },
                    "httpLocalRatelimit": { "defaultLimit": { "maxTokens": 100, "fillInterval": "1s" } }
                }
            }
        }),
    ));
}

#[test]
fn matchable_tcp_gateway_round_trip() {
    assert_round_trip::<MatchableTcpGateway>(document(
        "MatchableTcpGateway",
        "public-tcp",
        json!({
            "matcher": {
                "passthroughCipherSuites": ["ECDHE-RSA-AES256-GCM-SHA384"],
                "sourcePrefixRanges": [{ "addressPrefix": "0.0.0.0", "prefixLen": 0 }]
            },
            "tcpGateway": {
                "tcpHosts": [{
                    "name": "passthrough",
                    "destination": { "forwardSniClusterName": true }
                }],
                "options": { "tcpProxySettings": { "tunnelingConfig": { "hostname": "proxy.example.com:443" } } }
            }
        }),
    ));
}

#[test]
fn virtual_host_option_round_trip() {
    let doc = assert_round_trip::<VirtualHostOption>(document(
        "VirtualHostOption",
        "petstore-vh",
        json!({
            "options": virtual_host_options(),
            "targetRefs": [{
                "group": "gateway.networking.k8s.io",
                "kind": "Gateway",
                "name": "http",
                "namespace": "gloo-system"
            }]
        }),
    ));
    let options = doc.spec.unwrap().options.unwrap();
    assert!(options.jwt.is_some());
    assert!(options.ratelimit_early.is_some());
}

#[test]
fn route_option_round_trip() {
    let doc = assert_round_trip::<RouteOption>(document(
        "RouteOption",
        "petstore-route",
        json!({
            "options": route_options(),
            "targetRefs": [{ "group": "gateway.networking.k8s.io", "kind": "HTTPRoute", "name": "petstore" }]
        }),
    ));
    let options = doc.spec.unwrap().options.unwrap();
    assert_eq!(
        options.waf,
        Some(json!({ "customInterventionMessage": "blocked", "ruleSets": [{ "ruleStr": "SecRuleEngine On" }] }))
    );
    assert!(options.rbac.is_some());
    assert!(options.csrf.is_some());
}
