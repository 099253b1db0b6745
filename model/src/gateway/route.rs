use super::{Matcher, ResourceRef, RouteOptions, Selector};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A route sends matching requests to exactly one action: `routeAction`, `redirectAction`,
/// `directResponseAction` or `delegateAction`.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matchers: Option<Vec<Matcher>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inheritable_matchers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inheritable_path_matchers: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_action: Option<RouteAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_action: Option<RedirectAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_response_action: Option<DirectResponseAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_action: Option<DelegateAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graphql_api_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RouteOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_config_refs: Option<OptionsConfigRefs>,
}

/// References to option objects whose settings are merged into the owner's `options`.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsConfigRefs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delegate_options: Option<Vec<ResourceRef>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi: Option<MultiDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_group: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_header: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dynamic_forward_proxy: Option<DynamicForwardProxy>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kube: Option<KubernetesServiceDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consul: Option<ConsulServiceDestination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subset: Option<Subset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_spec: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesServiceDestination {
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsulServiceDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_centers: Option<Vec<String>>,
}

/// Restricts a destination to the endpoints carrying these metadata values.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destinations: Option<Vec<WeightedDestination>>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedDestination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DynamicForwardProxy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_host_rewrite_header: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedirectAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path_redirect: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_rewrite: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex_rewrite: Option<RegexRewrite>,
    /// One of `MOVED_PERMANENTLY`, `FOUND`, `SEE_OTHER`, `TEMPORARY_REDIRECT` or
    /// `PERMANENT_REDIRECT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub https_redirect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_query: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub port_redirect: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegexRewrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<RegexMatcher>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitution: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegexMatcher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub google_re2: Option<Value>,
}

#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectResponseAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

/// Delegates matching requests to one route table (`ref`) or to every route table picked by
/// `selector`. `name` and `namespace` are the deprecated form of `ref`.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DelegateAction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub route_table_ref: Option<ResourceRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<Selector>,
}
