// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! In-memory Kubernetes API server for tests.
//!
//! Objects are stored per collection path (`/api/v1/namespaces/foo/pods`) in
//! insertion order. Supports list (with `limit`), get, create and delete,
//! static documents for discovery, and forced rejections.

use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

pub const NAMESPACES: &str = "/api/v1/namespaces";

#[derive(Default)]
struct State {
    collections: BTreeMap<String, Vec<Value>>,
    documents: HashMap<String, Value>,
    rejected: HashSet<(String, String)>,
    requests: Vec<(String, String)>,
}

/// A fake API server usable as the transport of a `kube::Client`
#[derive(Clone, Default)]
pub struct FakeCluster {
    state: Arc<Mutex<State>>,
}

struct Route {
    api_version: String,
    collection: String,
    namespace: Option<String>,
    name: Option<String>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_namespace(self, name: &str) -> Self {
        self.with_object(NAMESPACES, namespace_json(name))
    }

    /// Seed an object into a collection
    pub fn with_object(self, collection: &str, object: Value) -> Self {
        self.state
            .lock()
            .unwrap()
            .collections
            .entry(collection.to_string())
            .or_default()
            .push(object);
        self
    }

    /// Serve a fixed body for GET requests on exactly this path
    pub fn with_document(self, path: &str, body: Value) -> Self {
        self.state
            .lock()
            .unwrap()
            .documents
            .insert(path.to_string(), body);
        self
    }

    /// Answer 403 Forbidden for this method and path
    pub fn reject(self, method: &str, path: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .rejected
            .insert((method.to_string(), path.to_string()));
        self
    }

    /// Build a kube Client backed by this fake
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    /// Names of the objects currently stored in a collection
    pub fn names(&self, collection: &str) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .map(|objects| objects.iter().map(object_name).collect())
            .unwrap_or_default()
    }

    pub fn object(&self, collection: &str, name: &str) -> Option<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .and_then(|objects| objects.iter().find(|o| object_name(o) == name).cloned())
    }

    /// Every request received so far as `(method, path)`
    pub fn requests(&self) -> Vec<(String, String)> {
        self.state.lock().unwrap().requests.clone()
    }

    fn handle(&self, method: &str, path: &str, query: Option<&str>, body: &[u8]) -> (u16, Value) {
        let mut state = self.state.lock().unwrap();
        state.requests.push((method.to_string(), path.to_string()));

        if state
            .rejected
            .contains(&(method.to_string(), path.to_string()))
        {
            return (403, status_json(403, "Forbidden", "request rejected by test"));
        }

        if method == "GET" {
            if let Some(doc) = state.documents.get(path) {
                return (200, doc.clone());
            }
        }

        let Some(route) = parse_route(path) else {
            return (404, not_found_json("path", path));
        };

        match (method, route.name.as_deref()) {
            ("GET", None) => {
                let mut items = state
                    .collections
                    .get(&route.collection)
                    .cloned()
                    .unwrap_or_default();
                if let Some(limit) = query_limit(query) {
                    items.truncate(limit);
                }
                (
                    200,
                    json!({
                        "apiVersion": route.api_version,
                        "kind": "List",
                        "metadata": { "resourceVersion": "1" },
                        "items": items,
                    }),
                )
            }
            ("GET", Some(name)) => match state
                .collections
                .get(&route.collection)
                .and_then(|objects| objects.iter().find(|o| object_name(o) == name))
            {
                Some(object) => (200, object.clone()),
                None => (404, not_found_json(&route.collection, name)),
            },
            ("POST", None) => {
                let Ok(mut object) = serde_json::from_slice::<Value>(body) else {
                    return (400, status_json(400, "BadRequest", "body is not JSON"));
                };
                let name = object_name(&object);
                if let Some(ns) = &route.namespace {
                    let ns_exists = state
                        .collections
                        .get(NAMESPACES)
                        .is_some_and(|all| all.iter().any(|o| &object_name(o) == ns));
                    if !ns_exists {
                        return (404, not_found_json("namespaces", ns));
                    }
                    object["metadata"]["namespace"] = json!(ns);
                }
                let objects = state.collections.entry(route.collection.clone()).or_default();
                if objects.iter().any(|o| object_name(o) == name) {
                    return (
                        409,
                        status_json(409, "AlreadyExists", &format!("\"{}\" already exists", name)),
                    );
                }
                object["metadata"]["uid"] = json!(format!("uid-{}", name));
                objects.push(object.clone());
                (201, object)
            }
            ("DELETE", Some(name)) => {
                let removed = state.collections.get_mut(&route.collection).and_then(|objects| {
                    let idx = objects.iter().position(|o| object_name(o) == name)?;
                    Some(objects.remove(idx))
                });
                let Some(object) = removed else {
                    return (404, not_found_json(&route.collection, name));
                };
                if route.collection == NAMESPACES {
                    let scoped = format!("/namespaces/{}/", name);
                    state.collections.retain(|path, _| !path.contains(&scoped));
                }
                (200, object)
            }
            _ => (405, status_json(405, "MethodNotAllowed", method)),
        }
    }
}

impl Service<Request<Body>> for FakeCluster {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let cluster = self.clone();

        Box::pin(async move {
            let (parts, body) = req.into_parts();
            let bytes = body
                .collect()
                .await
                .map_err(|e| tower::BoxError::from(e.to_string()))?
                .to_bytes();
            let (status, value) = cluster.handle(
                parts.method.as_str(),
                parts.uri.path(),
                parts.uri.query(),
                &bytes,
            );
            Ok::<_, tower::BoxError>(
                Response::builder()
                    .status(status)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&value)?))?,
            )
        })
    }
}

/// Split `/api/v1[/namespaces/{ns}]/{resource}[/{name}]` (or `/apis/{g}/{v}/...`)
fn parse_route(path: &str) -> Option<Route> {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    let base_len = match segments.first() {
        Some(&"api") => 2,
        Some(&"apis") => 3,
        _ => return None,
    };
    if segments.len() <= base_len {
        return None;
    }
    let base = segments[..base_len].join("/");
    let api_version = segments[1..base_len].join("/");
    let rest = &segments[base_len..];

    let (collection, namespace, name) = match rest {
        [resource] => (format!("/{}/{}", base, resource), None, None),
        [resource, name] => (format!("/{}/{}", base, resource), None, Some(name)),
        ["namespaces", ns, resource] => (
            format!("/{}/namespaces/{}/{}", base, ns, resource),
            Some(ns),
            None,
        ),
        ["namespaces", ns, resource, name] => (
            format!("/{}/namespaces/{}/{}", base, ns, resource),
            Some(ns),
            Some(name),
        ),
        _ => return None,
    };

    Some(Route {
        api_version,
        collection,
        namespace: namespace.map(|s| s.to_string()),
        name: name.map(|s| s.to_string()),
    })
}

fn query_limit(query: Option<&str>) -> Option<usize> {
    query?
        .split('&')
        .find_map(|kv| kv.strip_prefix("limit="))
        .and_then(|v| v.parse().ok())
        .filter(|limit| *limit > 0)
}

fn object_name(object: &Value) -> String {
    object["metadata"]["name"]
        .as_str()
        .unwrap_or_default()
        .to_string()
}

/// Create a mock namespace JSON object
pub fn namespace_json(name: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Namespace",
        "metadata": {
            "name": name,
            "uid": format!("uid-{}", name)
        },
        "status": { "phase": "Active" }
    })
}

/// Create a mock pod JSON object
pub fn pod_json(namespace: &str, name: &str, phase: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": format!("uid-{}", name)
        },
        "spec": {
            "containers": [{ "name": "main", "image": "busybox" }]
        },
        "status": { "phase": phase }
    })
}

/// `/api` document listing the core versions
pub fn api_versions_json(versions: &[&str]) -> Value {
    json!({
        "versions": versions,
        "serverAddressByClientCIDRs": []
    })
}

/// `/apis` document announcing one group; the first version is preferred
pub fn api_group_list_json(group: &str, versions: &[&str]) -> Value {
    let versions: Vec<Value> = versions
        .iter()
        .map(|v| json!({ "groupVersion": format!("{}/{}", group, v), "version": v }))
        .collect();
    json!({
        "groups": [{
            "name": group,
            "versions": versions,
            "preferredVersion": versions.first().cloned()
        }]
    })
}

/// Resource list for one group-version; entries are `(plural, kind)`, all namespaced
pub fn api_resource_list_json(group_version: &str, resources: &[(&str, &str)]) -> Value {
    let resources: Vec<Value> = resources
        .iter()
        .map(|(name, kind)| {
            json!({
                "name": name,
                "singularName": "",
                "namespaced": true,
                "kind": kind,
                "verbs": ["get", "list", "create", "delete"]
            })
        })
        .collect();
    json!({ "groupVersion": group_version, "resources": resources })
}

/// Create a Status failure body
pub fn status_json(code: u16, reason: &str, message: &str) -> Value {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> Value {
    status_json(404, "NotFound", &format!("{} \"{}\" not found", resource, name))
}
