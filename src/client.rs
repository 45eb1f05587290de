//! HTTP Client with builder pattern.
//!
//! The client never opens a connection: every request is handed to a
//! [`RoundTrip`] transport, usually a [`MockTransport`](crate::mock::MockTransport).
//!
//! # Example
//!
//! ```rust
//! use mockhttp::mock::ResponseMock;
//! use http::StatusCode;
//!
//! let client = ResponseMock::new(StatusCode::OK, None, Some("hello".into())).client();
//!
//! let resp = client.get("http://example.com/").send().unwrap();
//! assert_eq!(resp.text().unwrap(), "hello");
//! ```

use crate::base::neterror::NetError;
use crate::http::{HttpRequest, HttpResponse, RequestBody, SharedRequest};
use crate::transport::{NoNetwork, RoundTrip};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use std::fmt;
use std::sync::Arc;
use url::Url;

/// HTTP Client for making requests through a transport.
///
/// Use [`Client::new()`] with a transport or [`Client::builder()`] to also
/// configure default headers.
#[derive(Clone)]
pub struct Client {
    transport: Arc<dyn RoundTrip>,
    default_headers: HeaderMap,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("default_headers", &self.default_headers)
            .finish_non_exhaustive()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Client {
    /// Create a client that sends every request through `transport`.
    pub fn new<T: RoundTrip + 'static>(transport: T) -> Self {
        Self {
            transport: Arc::new(transport),
            default_headers: HeaderMap::new(),
        }
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Start building a GET request.
    pub fn get<U: AsRef<str>>(&self, url: U) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    /// Start building a POST request.
    pub fn post<U: AsRef<str>>(&self, url: U) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    /// Start building a PUT request.
    pub fn put<U: AsRef<str>>(&self, url: U) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    /// Start building a DELETE request.
    pub fn delete<U: AsRef<str>>(&self, url: U) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    /// Start building a HEAD request.
    pub fn head<U: AsRef<str>>(&self, url: U) -> RequestBuilder {
        self.request(Method::HEAD, url)
    }

    /// Start building a PATCH request.
    pub fn patch<U: AsRef<str>>(&self, url: U) -> RequestBuilder {
        self.request(Method::PATCH, url)
    }

    /// Start building a request with custom method.
    pub fn request<U: AsRef<str>>(&self, method: Method, url: U) -> RequestBuilder {
        RequestBuilder {
            client: self.clone(),
            method,
            url: url.as_ref().to_string(),
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    /// Send an already-built request. Exactly one round trip is made; no
    /// redirects are followed and nothing is retried.
    pub fn execute(&self, request: SharedRequest) -> Result<HttpResponse, NetError> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "dispatching request");
        self.transport.round_trip(request)
    }
}

/// Builder for creating a [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    transport: Option<Arc<dyn RoundTrip>>,
    default_headers: HeaderMap,
}

impl ClientBuilder {
    /// Set the transport. Without one, every request fails with
    /// [`NetError::NetworkAccessDenied`].
    pub fn transport<T: RoundTrip + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Add a header sent with every request. Invalid names or values are
    /// ignored.
    pub fn default_header<K, V>(mut self, key: K, value: V) -> Self
    where
        K: TryInto<HeaderName>,
        V: TryInto<HeaderValue>,
    {
        if let (Ok(key), Ok(val)) = (key.try_into(), value.try_into()) {
            self.default_headers.insert::<HeaderName>(key, val);
        }
        self
    }

    /// Build the client.
    pub fn build(self) -> Client {
        Client {
            transport: self.transport.unwrap_or_else(|| Arc::new(NoNetwork)),
            default_headers: self.default_headers,
        }
    }
}

/// Builder for a single request.
pub struct RequestBuilder {
    client: Client,
    method: Method,
    url: String,
    headers: HeaderMap,
    body: RequestBody,
}

impl RequestBuilder {
    /// Add a header. Invalid names or values are ignored.
    pub fn header<K, V>(mut self, key: K, value: V) -> Self
    where
        K: TryInto<HeaderName>,
        V: TryInto<HeaderValue>,
    {
        if let (Ok(key), Ok(val)) = (key.try_into(), value.try_into()) {
            self.headers.insert::<HeaderName>(key, val);
        }
        self
    }

    /// Set request body.
    pub fn body<B: Into<RequestBody>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    /// Set JSON body.
    #[cfg(feature = "json")]
    pub fn json<T: serde::Serialize>(mut self, json: &T) -> Self {
        if let Ok(bytes) = serde_json::to_vec(json) {
            self.body = RequestBody::from(bytes);
            self.headers.insert(
                http::header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        self
    }

    /// Build the request without sending it.
    pub fn build(self) -> Result<HttpRequest, NetError> {
        let url = Url::parse(&self.url).map_err(|_| NetError::InvalidUrl)?;

        let mut req = http::Request::builder()
            .method(self.method)
            .uri(url.as_str())
            .body(self.body)
            .map_err(|_| NetError::InvalidUrl)?;

        // Request headers override client defaults
        let headers = req.headers_mut();
        for (key, value) in self.client.default_headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        for (key, value) in self.headers.iter() {
            headers.insert(key.clone(), value.clone());
        }

        Ok(req)
    }

    /// Send the request.
    pub fn send(self) -> Result<HttpResponse, NetError> {
        let client = self.client.clone();
        let request = Arc::new(self.build()?);
        client.execute(request)
    }
}
