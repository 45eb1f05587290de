//! Tests for Client API.

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use mockhttp::http::TlsInfo;
use mockhttp::{
    Client, HttpResponse, MockTransport, NetError, RequestBody, ResponseMock, RoundTrip,
    SharedRequest,
};
use std::sync::{Arc, Mutex};

fn hello_mock() -> ResponseMock {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    ResponseMock::new(
        StatusCode::OK,
        Some(headers),
        Some(Bytes::from_static(b"hello")),
    )
}

/// Transport that answers as if over a TLS connection with trailers.
struct Secure {
    inner: MockTransport,
    tls: TlsInfo,
}

impl RoundTrip for Secure {
    fn round_trip(&self, request: SharedRequest) -> Result<HttpResponse, NetError> {
        let mut trailers = HeaderMap::new();
        trailers.insert("x-checksum", HeaderValue::from_static("abc123"));
        Ok(self
            .inner
            .round_trip(request)?
            .with_tls(self.tls.clone())
            .with_trailers(trailers))
    }
}

/// Transport that remembers what it was asked before delegating.
struct Recording {
    inner: MockTransport,
    seen: Mutex<Vec<SharedRequest>>,
}

impl RoundTrip for Recording {
    fn round_trip(&self, request: SharedRequest) -> Result<HttpResponse, NetError> {
        self.seen.lock().unwrap().push(request.clone());
        self.inner.round_trip(request)
    }
}

// === Client Tests ===

#[test]
fn test_mock_client_get() {
    let client = hello_mock().client();

    let resp = client.get("http://example.com/").send().unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[CONTENT_TYPE], "text/plain");
    assert_eq!(resp.headers()[CONTENT_LENGTH], "5");
    assert_eq!(resp.request().method(), Method::GET);
    assert_eq!(resp.request().uri(), "http://example.com/");
    assert_eq!(resp.text().unwrap(), "hello");
}

#[test]
fn test_client_response_matches_render() {
    let mock = hello_mock();
    let client = mock.client();

    let sent = client.get("http://example.com/path?q=1").send().unwrap();
    let rendered = mock.render(sent.request().clone());

    assert_eq!(sent.status_line(), rendered.status_line());
    assert_eq!(sent.headers(), rendered.headers());
    assert_eq!(sent.content_length(), rendered.content_length());
    assert_eq!(sent.bytes().unwrap(), rendered.bytes().unwrap());
}

#[test]
fn test_client_request_methods() {
    let client = hello_mock().client();

    let cases = [
        (client.get("http://example.com/"), Method::GET),
        (client.post("http://example.com/"), Method::POST),
        (client.put("http://example.com/"), Method::PUT),
        (client.delete("http://example.com/"), Method::DELETE),
        (client.head("http://example.com/"), Method::HEAD),
        (client.patch("http://example.com/"), Method::PATCH),
        (
            client.request(Method::OPTIONS, "http://example.com/"),
            Method::OPTIONS,
        ),
    ];

    for (builder, method) in cases {
        let resp = builder.send().unwrap();
        assert_eq!(resp.request().method(), method);
    }
}

#[test]
fn test_client_shared_transport_error() {
    let transport = Arc::new(hello_mock().transport());
    let client = Client::builder().transport(transport.clone()).build();

    assert!(client.get("http://example.com/").send().is_ok());

    transport.set_mock_error(Some(NetError::ConnectionTimedOut));
    let err = client.get("http://example.com/").send().unwrap_err();
    assert_eq!(err, NetError::ConnectionTimedOut);

    transport.set_mock_error(None);
    assert!(client.get("http://example.com/").send().is_ok());
}

#[test]
fn test_mock_client_toggle_error() {
    let (client, transport) = hello_mock().client_with_transport();

    assert!(client.get("http://example.com/").send().is_ok());

    transport.set_mock_error(Some(NetError::ConnectionRefused));
    let err = client.get("http://example.com/").send().unwrap_err();
    assert_eq!(err, NetError::ConnectionRefused);

    transport.set_mock_error(None);
    let resp = client.get("http://example.com/").send().unwrap();
    assert_eq!(resp.text().unwrap(), "hello");
}

#[test]
fn test_custom_transport_reports_tls_and_trailers() {
    let tls = TlsInfo {
        version: "TLSv1.3".into(),
        cipher_suite: "TLS_AES_128_GCM_SHA256".into(),
        alpn_protocol: Some("http/1.1".into()),
    };
    let client = Client::new(Secure {
        inner: hello_mock().transport(),
        tls: tls.clone(),
    });

    let resp = client.get("https://example.com/").send().unwrap();
    assert_eq!(resp.tls(), Some(&tls));
    assert_eq!(resp.trailers().unwrap()["x-checksum"], "abc123");
    assert_eq!(resp.text().unwrap(), "hello");
}

#[test]
fn test_client_sends_headers_and_body() {
    let recording = Arc::new(Recording {
        inner: hello_mock().transport(),
        seen: Mutex::new(Vec::new()),
    });
    let client = Client::builder()
        .transport(recording.clone())
        .default_header(http::header::USER_AGENT, "mockhttp-test")
        .build();

    client
        .post("http://example.com/items")
        .header("x-custom", "value")
        .body(b"test body".to_vec())
        .send()
        .unwrap();

    let seen = recording.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let req = &seen[0];
    assert_eq!(req.headers()[http::header::USER_AGENT], "mockhttp-test");
    assert_eq!(req.headers()["x-custom"], "value");
    assert_eq!(req.body(), &RequestBody::from("test body"));
}

#[cfg(feature = "json")]
#[test]
fn test_client_json_body() {
    let recording = Arc::new(Recording {
        inner: hello_mock().transport(),
        seen: Mutex::new(Vec::new()),
    });
    let client = Client::new(recording.clone());

    client
        .post("http://example.com/")
        .json(&serde_json::json!({ "name": "mock" }))
        .send()
        .unwrap();

    let seen = recording.seen.lock().unwrap();
    assert_eq!(seen[0].headers()[CONTENT_TYPE], "application/json");
    let body: serde_json::Value = serde_json::from_slice(seen[0].body().as_bytes()).unwrap();
    assert_eq!(body["name"], "mock");
}

#[test]
fn test_client_execute_prebuilt_request() {
    let client = hello_mock().client();
    let req = Arc::new(
        http::Request::get("http://example.com/")
            .body(RequestBody::Empty)
            .unwrap(),
    );

    let resp = client.execute(req.clone()).unwrap();
    assert!(Arc::ptr_eq(resp.request(), &req));
}

#[test]
fn test_client_does_not_follow_redirects() {
    let client = ResponseMock::new(StatusCode::FOUND, None, None)
        .with_header(http::header::LOCATION, "http://example.com/elsewhere")
        .client();

    let resp = client.get("http://example.com/").send().unwrap();
    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.request().uri(), "http://example.com/");
}

#[test]
fn test_client_invalid_url() {
    let client = hello_mock().client();
    let err = client.get("://missing-scheme").send().unwrap_err();
    assert_eq!(err, NetError::InvalidUrl);
}

#[test]
fn test_client_clone() {
    let client = hello_mock().client();
    let cloned = client.clone();
    assert_eq!(cloned.get("http://example.com/").send().unwrap().text().unwrap(), "hello");
}
