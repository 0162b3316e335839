//! Endpoint metadata: what responses a route handler may produce.
//!
//! Result types describe themselves through [`EndpointMetadataProvider`]. The
//! description is a property of the *type*, so it can be collected when the
//! router is built, before any request is served. [`EndpointCatalog`] gathers
//! the descriptions of many endpoints into one serializable document for
//! documentation tooling.

use serde::{Deserialize, Serialize};

/// Content type written by the JSON-bodied results.
pub const APPLICATION_JSON: &str = "application/json";

/// One response an endpoint may produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducesResponseType {
    pub status_code: u16,
    /// Rust type name of the body, `None` when the response has no body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_types: Vec<String>,
}

impl ProducesResponseType {
    /// A response with a status code and no body.
    pub fn status(status_code: u16) -> Self {
        Self {
            status_code,
            value_type: None,
            content_types: Vec::new(),
        }
    }

    /// A response carrying a `T` serialized as `content_type`.
    pub fn typed<T: ?Sized>(status_code: u16, content_type: &str) -> Self {
        Self {
            status_code,
            value_type: Some(std::any::type_name::<T>().to_string()),
            content_types: vec![content_type.to_string()],
        }
    }
}

/// Identifies the endpoint metadata is being populated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub method: String,
    pub path: String,
}

impl EndpointDescriptor {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into().to_ascii_uppercase(),
            path: path.into(),
        }
    }
}

/// Mutable view handed to providers while an endpoint is being described.
#[derive(Debug)]
pub struct EndpointMetadataContext {
    endpoint: EndpointDescriptor,
    responses: Vec<ProducesResponseType>,
}

impl EndpointMetadataContext {
    pub fn new(endpoint: EndpointDescriptor) -> Self {
        Self {
            endpoint,
            responses: Vec::new(),
        }
    }

    pub fn endpoint(&self) -> &EndpointDescriptor {
        &self.endpoint
    }

    pub fn responses(&self) -> &[ProducesResponseType] {
        &self.responses
    }

    /// Append one possible response.
    pub fn add(&mut self, response: ProducesResponseType) {
        self.responses.push(response);
    }

    pub fn into_description(self) -> EndpointDescription {
        EndpointDescription {
            method: self.endpoint.method,
            path: self.endpoint.path,
            responses: self.responses,
        }
    }
}

/// A type that can describe the responses it produces.
pub trait EndpointMetadataProvider {
    /// Append this type's responses to `ctx`.
    fn populate_metadata(ctx: &mut EndpointMetadataContext);
}

/// Populated metadata for one endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointDescription {
    pub method: String,
    pub path: String,
    pub responses: Vec<ProducesResponseType>,
}

/// Run `P`'s provider for the given endpoint.
pub fn describe<P: EndpointMetadataProvider>(
    method: impl Into<String>,
    path: impl Into<String>,
) -> EndpointDescription {
    let mut ctx = EndpointMetadataContext::new(EndpointDescriptor::new(method, path));
    P::populate_metadata(&mut ctx);
    ctx.into_description()
}

/// Ordered collection of endpoint descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointCatalog {
    endpoints: Vec<EndpointDescription>,
}

impl EndpointCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describe an endpoint whose handler returns `P`.
    ///
    /// Registering the same method and path twice replaces the earlier entry
    /// in place.
    pub fn register<P: EndpointMetadataProvider>(
        &mut self,
        method: impl Into<String>,
        path: impl Into<String>,
    ) -> &mut Self {
        let description = describe::<P>(method, path);
        tracing::debug!(
            method = %description.method,
            path = %description.path,
            responses = description.responses.len(),
            "endpoint metadata registered"
        );

        match self
            .endpoints
            .iter_mut()
            .find(|e| e.method == description.method && e.path == description.path)
        {
            Some(existing) => *existing = description,
            None => self.endpoints.push(description),
        }
        self
    }

    pub fn endpoints(&self) -> &[EndpointDescription] {
        &self.endpoints
    }

    pub fn find(&self, method: &str, path: &str) -> Option<&EndpointDescription> {
        self.endpoints
            .iter()
            .find(|e| e.method.eq_ignore_ascii_case(method) && e.path == path)
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
