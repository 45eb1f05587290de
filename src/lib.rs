//! # mockhttp
//!
//! Canned HTTP responses for unit tests, without any network I/O.
//!
//! Declare the status, headers and body a test should see, then get
//!
//! - a [`Client`] whose transport returns that response,
//! - a [`MockTransport`] to plug into a client yourself, or
//! - an [`HttpResponse`] bound to a request you built.
//!
//! Rendered responses are normalized to look like valid HTTP/1.0 messages:
//! `Content-Length` always matches the body, and 204/304 responses never
//! carry a body.
//!
//! ## Quick Start
//!
//! ```rust
//! use mockhttp::{NetError, ResponseMock};
//! use http::{header, StatusCode};
//!
//! let mock = ResponseMock::new(StatusCode::OK, None, Some("hello".into()))
//!     .with_header(header::CONTENT_TYPE, "text/plain");
//!
//! let resp = mock.client().get("http://example.com/").send().unwrap();
//! assert_eq!(resp.status_line(), "200 OK");
//! assert_eq!(resp.headers()[header::CONTENT_LENGTH], "5");
//! assert_eq!(resp.text().unwrap(), "hello");
//!
//! // Simulate a DNS failure
//! let transport = mock.transport();
//! transport.set_mock_error(Some(NetError::NameNotResolved));
//! ```
//!
//! ## Modules
//!
//! - [`base`] - Error definitions
//! - [`http`] - Request/response bodies and the response type
//! - [`transport`] - The [`RoundTrip`] seam
//! - [`mock`] - [`ResponseMock`] and [`MockTransport`]
//! - [`client`] - Builder-style client on top of a transport

pub mod base;
pub mod client;
pub mod http;
pub mod mock;
pub mod transport;

pub use crate::base::NetError;
pub use crate::client::{Client, ClientBuilder, RequestBuilder};
pub use crate::http::{HttpRequest, HttpResponse, RequestBody, ResponseBody, SharedRequest};
pub use crate::mock::{MockTransport, ResponseMock};
pub use crate::transport::RoundTrip;
