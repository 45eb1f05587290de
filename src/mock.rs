//! Canned responses and the transport that serves them.
//!
//! A [`ResponseMock`] holds a status, headers and a body. It renders a fresh
//! [`HttpResponse`] for each request, and can be turned into a
//! [`MockTransport`] or a ready-made [`Client`].

use crate::base::neterror::NetError;
use crate::client::Client;
use crate::http::{HttpResponse, SharedRequest};
use crate::transport::RoundTrip;
use bytes::Bytes;
use http::header::CONTENT_LENGTH;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Statuses that never carry a message body.
fn is_bodiless(status: StatusCode) -> bool {
    status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED
}

/// A canned HTTP response.
#[derive(Debug, Clone)]
pub struct ResponseMock {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl ResponseMock {
    /// Create a mock answering with `status`, `headers` and `body`.
    ///
    /// Missing headers or body are stored as an empty map and an empty
    /// buffer.
    pub fn new(status: StatusCode, headers: Option<HeaderMap>, body: Option<Bytes>) -> Self {
        Self {
            status,
            headers: headers.unwrap_or_default(),
            body: body.unwrap_or_default(),
        }
    }

    /// Add a header. Invalid names or values are ignored.
    pub fn with_header<K, V>(mut self, key: K, value: V) -> Self
    where
        K: TryInto<HeaderName>,
        V: TryInto<HeaderValue>,
    {
        if let (Ok(key), Ok(val)) = (key.try_into(), value.try_into()) {
            self.headers.insert::<HeaderName>(key, val);
        }
        self
    }

    /// Replace the body.
    pub fn with_body<B: Into<Bytes>>(mut self, body: B) -> Self {
        self.body = body.into();
        self
    }

    /// Replace the body with `value` serialized as JSON and set the content
    /// type. The body is left untouched if serialization fails.
    #[cfg(feature = "json")]
    pub fn with_json<T: serde::Serialize>(mut self, value: &T) -> Self {
        if let Ok(bytes) = serde_json::to_vec(value) {
            self.body = Bytes::from(bytes);
            self.headers.insert(
                http::header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Build the response to `request`.
    ///
    /// `Content-Length` always reflects the body. 204 and 304 responses get
    /// an empty body and no `Content-Length` header, whatever was stored.
    pub fn render(&self, request: SharedRequest) -> HttpResponse {
        let mut headers = self.headers.clone();

        let body = if is_bodiless(self.status) {
            headers.remove(CONTENT_LENGTH);
            Bytes::new()
        } else {
            headers.insert(CONTENT_LENGTH, HeaderValue::from(self.body.len()));
            self.body.clone()
        };

        tracing::trace!(
            status = %self.status,
            content_length = body.len(),
            uri = %request.uri(),
            "rendering mock response"
        );

        HttpResponse::new(self.status, headers, body, request)
    }

    /// A transport answering every request with this mock.
    pub fn transport(&self) -> MockTransport {
        MockTransport::new(self.clone())
    }

    /// A client whose only transport is [`ResponseMock::transport`].
    pub fn client(&self) -> Client {
        self.client_with_transport().0
    }

    /// Like [`ResponseMock::client`], also returning the transport the client
    /// sends through, so a test can inject errors mid-test.
    pub fn client_with_transport(&self) -> (Client, Arc<MockTransport>) {
        let transport = Arc::new(self.transport());
        (Client::new(transport.clone()), transport)
    }
}

/// Transport that answers from a [`ResponseMock`], or fails with an injected
/// error.
///
/// The injected error can be changed through a shared reference, so a test
/// can keep an `Arc<MockTransport>` and flip it while a client holds a clone.
#[derive(Debug)]
pub struct MockTransport {
    mock: Arc<ResponseMock>,
    mock_error: Mutex<Option<NetError>>,
}

impl MockTransport {
    pub fn new(mock: impl Into<Arc<ResponseMock>>) -> Self {
        Self {
            mock: mock.into(),
            mock_error: Mutex::new(None),
        }
    }

    /// The mock this transport renders from.
    pub fn mock(&self) -> &ResponseMock {
        &self.mock
    }

    /// The error currently returned by every round trip, if any.
    pub fn mock_error(&self) -> Option<NetError> {
        *self.lock_error()
    }

    /// Set or clear the error returned by every round trip.
    pub fn set_mock_error(&self, error: Option<NetError>) {
        *self.lock_error() = error;
    }

    fn lock_error(&self) -> MutexGuard<'_, Option<NetError>> {
        // The guarded value is a Copy enum, always valid after a panic.
        self.mock_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl RoundTrip for MockTransport {
    fn round_trip(&self, request: SharedRequest) -> Result<HttpResponse, NetError> {
        if let Some(err) = self.mock_error() {
            tracing::debug!(error = %err, uri = %request.uri(), "returning injected transport error");
            return Err(err);
        }

        Ok(self.mock.render(request))
    }
}
