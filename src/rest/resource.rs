//! REST Resource trait for collection-level operations.
//!
//! This module defines the [`RestResource`] trait. A resource declares its
//! name, its body keys, and a path table, and gains `find()`, `all()`,
//! `create()`, and `destroy_by_id()`.
//!
//! Instance-level operations (`save`, `destroy`) live on the resource type
//! itself, since only it knows which of its fields are dirty.
//!
//! # Example
//!
//! ```rust,ignore
//! use gumroad_api::rest::{RestResource, ResourcePath, ResourceOperation};
//! use gumroad_api::HttpMethod;
//! use serde_json::{Map, Value};
//!
//! #[derive(Debug, Clone, Default)]
//! pub struct Offer {
//!     id: Option<String>,
//!     code: Option<String>,
//! }
//!
//! impl RestResource for Offer {
//!     const NAME: &'static str = "Offer";
//!     const KEY: &'static str = "offer";
//!     const PLURAL: &'static str = "offers";
//!     const PATHS: &'static [ResourcePath] = &[
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "offers"),
//!         ResourcePath::new(HttpMethod::Get, ResourceOperation::Find, &["id"], "offers/{id}"),
//!     ];
//!
//!     fn id(&self) -> Option<&str> {
//!         self.id.as_deref()
//!     }
//!
//!     fn from_attributes(attributes: &Map<String, Value>) -> Self {
//!         Self {
//!             id: attributes.get("id").and_then(Value::as_str).map(String::from),
//!             code: attributes.get("code").and_then(Value::as_str).map(String::from),
//!         }
//!     }
//! }
//!
//! let offers = Offer::all(&client).await?;
//! let offer = Offer::find(&client, "abc").await?;
//! ```

use serde_json::{Map, Value};

use crate::clients::{FormParams, HttpMethod, RestClient};
use crate::rest::{build_path, get_path, ResourceError, ResourceOperation, ResourcePath};

/// A REST resource that can be listed, fetched, created, and deleted.
///
/// # Associated Constants
///
/// - `NAME`: The resource name used in errors and logs (e.g., "Link")
/// - `KEY`: The response body key holding a single resource (e.g., "link")
/// - `PLURAL`: The response body key holding a collection (e.g., "links")
/// - `PATHS`: Available paths for each operation
#[allow(async_fn_in_trait)]
pub trait RestResource: Sized + Send + Sync {
    /// The resource name (e.g., "Link").
    const NAME: &'static str;

    /// The key of a single resource in response bodies.
    const KEY: &'static str;

    /// The key of a resource collection in response bodies.
    const PLURAL: &'static str;

    /// Available paths for this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the resource's ID, or `None` if it was never persisted.
    fn id(&self) -> Option<&str>;

    /// Builds a clean resource from trusted server data.
    ///
    /// Unknown keys are ignored.
    fn from_attributes(attributes: &Map<String, Value>) -> Self;

    /// Resolves the verb and concrete path for `operation` given the known IDs.
    ///
    /// Requests are sent with the verb from the matching path table row.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if no path for the
    /// operation can be built from `ids`.
    fn resolve_path(
        operation: ResourceOperation,
        ids: &[(&str, &str)],
    ) -> Result<(HttpMethod, String), ResourceError> {
        let available_ids: Vec<&str> = ids.iter().map(|(name, _)| *name).collect();
        let path = get_path(Self::PATHS, operation, &available_ids).ok_or(
            ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            },
        )?;

        Ok((path.http_method, build_path(path.template, ids)))
    }

    /// Lists every resource in the collection.
    ///
    /// Each element is built with [`from_attributes`](Self::from_attributes),
    /// so every returned resource is clean.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the response has no
    /// collection array or an element of it is not an object, or the
    /// request's error otherwise.
    async fn all(client: &RestClient) -> Result<Vec<Self>, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::All, &[])?;
        let response = client.request(method, &path, None).await?;

        let items = response
            .field(Self::PLURAL)
            .and_then(Value::as_array)
            .ok_or(ResourceError::MissingField {
                resource: Self::NAME,
                field: Self::PLURAL,
            })?;

        items
            .iter()
            .map(|item| {
                item.as_object()
                    .map(Self::from_attributes)
                    .ok_or(ResourceError::MissingField {
                        resource: Self::NAME,
                        field: Self::PLURAL,
                    })
            })
            .collect()
    }

    /// Fetches a single resource by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingField`] if the response has no
    /// resource object, or the request's error otherwise. An unknown ID
    /// surfaces as the server's [`ApiError`](crate::clients::ApiError).
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let link = Link::find(&client, "abc").await?;
    /// println!("Found: {:?}", link.name());
    /// ```
    async fn find(client: &RestClient, id: &str) -> Result<Self, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Find, &[("id", id)])?;
        let response = client.request(method, &path, None).await?;

        let attributes = response
            .field(Self::KEY)
            .and_then(Value::as_object)
            .ok_or(ResourceError::MissingField {
                resource: Self::NAME,
                field: Self::KEY,
            })?;

        Ok(Self::from_attributes(attributes))
    }

    /// Creates a resource from `params`.
    ///
    /// The new resource is read from the response's resource object, or from
    /// the envelope itself when the server returns the fields at top level.
    ///
    /// # Errors
    ///
    /// Returns the request's error.
    async fn create(client: &RestClient, params: FormParams) -> Result<Self, ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Create, &[])?;
        let response = client.request(method, &path, Some(params)).await?;

        let attributes = response
            .field(Self::KEY)
            .and_then(Value::as_object)
            .or_else(|| response.body.as_object());

        Ok(attributes.map_or_else(
            || Self::from_attributes(&Map::new()),
            Self::from_attributes,
        ))
    }

    /// Deletes the resource with the given ID.
    ///
    /// # Errors
    ///
    /// Returns the request's error.
    async fn destroy_by_id(client: &RestClient, id: &str) -> Result<(), ResourceError> {
        let (method, path) = Self::resolve_path(ResourceOperation::Delete, &[("id", id)])?;
        client.request(method, &path, None).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiRoot, GumroadConfig};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Debug, Clone, Default, PartialEq)]
    struct MockResource {
        id: Option<String>,
        title: Option<String>,
    }

    impl RestResource for MockResource {
        const NAME: &'static str = "MockResource";
        const KEY: &'static str = "mock_resource";
        const PLURAL: &'static str = "mock_resources";
        const PATHS: &'static [ResourcePath] = &[
            ResourcePath::new(HttpMethod::Get, ResourceOperation::All, &[], "mock_resources"),
            ResourcePath::new(
                HttpMethod::Get,
                ResourceOperation::Find,
                &["id"],
                "mock_resources/{id}",
            ),
            ResourcePath::new(
                HttpMethod::Post,
                ResourceOperation::Delete,
                &["id"],
                "mock_resources/{id}/archive",
            ),
        ];

        fn id(&self) -> Option<&str> {
            self.id.as_deref()
        }

        fn from_attributes(attributes: &Map<String, Value>) -> Self {
            Self {
                id: attributes.get("id").and_then(Value::as_str).map(String::from),
                title: attributes
                    .get("title")
                    .and_then(Value::as_str)
                    .map(String::from),
            }
        }
    }

    async fn mock_client(server: &MockServer) -> RestClient {
        let config = GumroadConfig::builder()
            .api_root(ApiRoot::new(server.uri()).unwrap())
            .build();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_resolve_path_fills_id() {
        let (method, path) =
            MockResource::resolve_path(ResourceOperation::Find, &[("id", "abc")]).unwrap();
        assert_eq!(method, HttpMethod::Get);
        assert_eq!(path, "mock_resources/abc");
    }

    #[test]
    fn test_resolve_path_takes_verb_from_table() {
        let (method, path) =
            MockResource::resolve_path(ResourceOperation::Delete, &[("id", "abc")]).unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert_eq!(path, "mock_resources/abc/archive");
    }

    #[test]
    fn test_resolve_path_fails_for_unsupported_operation() {
        let result = MockResource::resolve_path(ResourceOperation::Update, &[("id", "abc")]);
        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed {
                resource: "MockResource",
                operation: "update",
            })
        ));
    }

    #[tokio::test]
    async fn test_destroy_by_id_sends_verb_from_table() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/mock_resources/abc/archive"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
            .expect(1)
            .mount(&server)
            .await;
        let client = mock_client(&server).await;

        MockResource::destroy_by_id(&client, "abc").await.unwrap();
    }

    #[tokio::test]
    async fn test_all_rejects_non_object_elements() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/mock_resources"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "mock_resources": [{"id": "a1"}, "oops", 7]
            })))
            .mount(&server)
            .await;
        let client = mock_client(&server).await;

        let result = MockResource::all(&client).await;
        assert!(matches!(
            result,
            Err(ResourceError::MissingField {
                resource: "MockResource",
                field: "mock_resources",
            })
        ));
    }

    #[test]
    fn test_resolve_path_fails_without_id() {
        let result = MockResource::resolve_path(ResourceOperation::Find, &[]);
        assert!(matches!(
            result,
            Err(ResourceError::PathResolutionFailed { .. })
        ));
    }

    #[test]
    fn test_from_attributes_ignores_unknown_keys() {
        let attributes = json!({"id": "x1", "title": "Hat", "color": "red"});
        let resource = MockResource::from_attributes(attributes.as_object().unwrap());

        assert_eq!(resource.id(), Some("x1"));
        assert_eq!(resource.title.as_deref(), Some("Hat"));
    }

    #[test]
    fn test_resource_trait_bounds() {
        fn assert_trait_bounds<T: RestResource>() {}
        assert_trait_bounds::<MockResource>();
    }
}
