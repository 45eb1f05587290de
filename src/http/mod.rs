pub mod requestbody;
pub mod response;
pub mod responsebody;

use std::sync::Arc;

// Re-exports for convenience
pub use requestbody::RequestBody;
pub use response::{HttpResponse, TlsInfo};
pub use responsebody::{BodyStream, ResponseBody};

/// Request type accepted by transports.
pub type HttpRequest = http::Request<RequestBody>;

/// A request shared between the caller and the response that answers it.
/// Compare with [`Arc::ptr_eq`] to check a response belongs to a request.
pub type SharedRequest = Arc<HttpRequest>;
