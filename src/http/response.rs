//! HTTP Response with body access.

use crate::base::neterror::NetError;
use crate::http::{ResponseBody, SharedRequest};
use bytes::Bytes;
use http::{HeaderMap, StatusCode, Version};

/// Negotiated TLS session details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsInfo {
    /// Protocol version, e.g. "TLSv1.3".
    pub version: String,
    /// IANA cipher suite name.
    pub cipher_suite: String,
    /// ALPN protocol, if one was negotiated.
    pub alpn_protocol: Option<String>,
}

/// HTTP Response with accessible body.
/// This is the user-facing response type that owns the body.
#[derive(Debug)]
pub struct HttpResponse {
    status: StatusCode,
    status_line: String,
    version: Version,
    headers: HeaderMap,
    content_length: u64,
    transfer_encoding: Vec<String>,
    close: bool,
    uncompressed: bool,
    trailers: Option<HeaderMap>,
    tls: Option<TlsInfo>,
    request: SharedRequest,
    body: Option<ResponseBody>,
}

impl HttpResponse {
    /// Create a response to `request` with the given status, headers and body.
    ///
    /// The version is always HTTP/1.0 and `content_length` is the body
    /// length. The header map is taken as-is; callers that want a
    /// `Content-Length` header must set it themselves.
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: Bytes,
        request: SharedRequest,
    ) -> Self {
        let status_line = format!(
            "{} {}",
            status.as_str(),
            status.canonical_reason().unwrap_or("")
        );

        Self {
            status,
            status_line,
            version: Version::HTTP_10,
            headers,
            content_length: body.len() as u64,
            transfer_encoding: Vec::new(),
            close: false,
            uncompressed: false,
            trailers: None,
            tls: None,
            request,
            body: Some(ResponseBody::new(body)),
        }
    }

    /// Attach trailer headers.
    pub fn with_trailers(mut self, trailers: HeaderMap) -> Self {
        self.trailers = Some(trailers);
        self
    }

    /// Attach TLS session details.
    pub fn with_tls(mut self, tls: TlsInfo) -> Self {
        self.tls = Some(tls);
        self
    }

    /// Get the status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Status line without the protocol, e.g. "200 OK".
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// Get the HTTP version.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Protocol string, e.g. "HTTP/1.0".
    pub fn proto(&self) -> &'static str {
        match self.version {
            Version::HTTP_09 => "HTTP/0.9",
            Version::HTTP_10 => "HTTP/1.0",
            Version::HTTP_2 => "HTTP/2.0",
            Version::HTTP_3 => "HTTP/3.0",
            _ => "HTTP/1.1",
        }
    }

    pub fn proto_major(&self) -> u8 {
        match self.version {
            Version::HTTP_09 => 0,
            Version::HTTP_2 => 2,
            Version::HTTP_3 => 3,
            _ => 1,
        }
    }

    pub fn proto_minor(&self) -> u8 {
        match self.version {
            Version::HTTP_09 => 9,
            Version::HTTP_11 => 1,
            _ => 0,
        }
    }

    /// Get a reference to the headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Length of the body in bytes.
    pub fn content_length(&self) -> u64 {
        self.content_length
    }

    /// Transfer codings applied to the body, outermost first. Always present,
    /// possibly empty.
    pub fn transfer_encoding(&self) -> &[String] {
        &self.transfer_encoding
    }

    /// Whether the connection should be closed after this response.
    pub fn close_connection(&self) -> bool {
        self.close
    }

    /// Whether the body was transparently decompressed.
    pub fn uncompressed(&self) -> bool {
        self.uncompressed
    }

    pub fn trailers(&self) -> Option<&HeaderMap> {
        self.trailers.as_ref()
    }

    pub fn tls(&self) -> Option<&TlsInfo> {
        self.tls.as_ref()
    }

    /// The request this response answers.
    pub fn request(&self) -> &SharedRequest {
        &self.request
    }

    /// Borrow the body, if it has not been taken.
    pub fn body(&self) -> Option<&ResponseBody> {
        self.body.as_ref()
    }

    /// Take the response body for consumption.
    /// Can only be called once - subsequent calls return None.
    pub fn take_body(&mut self) -> Option<ResponseBody> {
        self.body.take()
    }

    /// Convenience method to consume body as bytes.
    pub fn bytes(mut self) -> Result<Bytes, NetError> {
        self.body
            .take()
            .map(ResponseBody::bytes)
            .ok_or(NetError::HttpBodyError)
    }

    /// Convenience method to consume body as text.
    pub fn text(mut self) -> Result<String, NetError> {
        self.body.take().ok_or(NetError::HttpBodyError)?.text()
    }

    /// Convenience method to consume body as JSON.
    #[cfg(feature = "json")]
    pub fn json<T: serde::de::DeserializeOwned>(mut self) -> Result<T, NetError> {
        self.body.take().ok_or(NetError::HttpBodyError)?.json()
    }
}
