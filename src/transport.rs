//! The transport seam between a [`Client`](crate::client::Client) and the
//! thing that actually answers its requests.

use crate::base::neterror::NetError;
use crate::http::{HttpResponse, SharedRequest};
use std::sync::Arc;

/// A single request/response exchange.
///
/// This is the extension point a client delegates sending to. Implementations
/// must be thread-safe and must not block.
///
/// # Design Notes
///
/// - Uses `&self` so one transport can serve concurrent requests.
/// - Errors are returned unchanged to the caller of `send`.
pub trait RoundTrip: Send + Sync {
    /// Answer `request`.
    fn round_trip(&self, request: SharedRequest) -> Result<HttpResponse, NetError>;
}

/// Blanket implementation for Arc-wrapped transports.
impl<T: RoundTrip + ?Sized> RoundTrip for Arc<T> {
    fn round_trip(&self, request: SharedRequest) -> Result<HttpResponse, NetError> {
        (**self).round_trip(request)
    }
}

impl<T: RoundTrip + ?Sized> RoundTrip for Box<T> {
    fn round_trip(&self, request: SharedRequest) -> Result<HttpResponse, NetError> {
        (**self).round_trip(request)
    }
}

/// Transport used by clients built without one. Fails every request, since
/// nothing in this crate opens a socket.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNetwork;

impl RoundTrip for NoNetwork {
    fn round_trip(&self, request: SharedRequest) -> Result<HttpResponse, NetError> {
        tracing::warn!(uri = %request.uri(), "client has no transport, refusing request");
        Err(NetError::NetworkAccessDenied)
    }
}
