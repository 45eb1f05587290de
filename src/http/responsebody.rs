//! Response body backed by an in-memory snapshot.
//!
//! The body can be consumed three ways: synchronously through
//! [`std::io::Read`], asynchronously as an [`http_body::Body`] or
//! [`futures::Stream`], or all at once with [`ResponseBody::bytes`].

use crate::base::neterror::NetError;
use bytes::{Buf, Bytes};
use futures::Stream;
use http_body::{Body, Frame, SizeHint};
use std::convert::Infallible;
use std::io::{self, Read};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Readable, closable response body.
///
/// Holds a reference-counted view of the bytes it was created from, so
/// reading never mutates the source buffer.
#[derive(Debug, Clone, Default)]
pub struct ResponseBody {
    data: Bytes,
}

impl ResponseBody {
    /// Create a body over the given bytes.
    pub fn new(data: Bytes) -> Self {
        Self { data }
    }

    /// Create an empty body.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of bytes not yet read.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether all bytes have been read.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read the remaining body as bytes.
    pub fn bytes(self) -> Bytes {
        self.data
    }

    /// Read the remaining body as a UTF-8 string.
    pub fn text(self) -> Result<String, NetError> {
        String::from_utf8(self.data.to_vec()).map_err(|_| NetError::InvalidUtf8)
    }

    /// Read the remaining body as JSON, deserializing to type T.
    #[cfg(feature = "json")]
    pub fn json<T: serde::de::DeserializeOwned>(self) -> Result<T, NetError> {
        serde_json::from_slice(&self.data).map_err(|_| NetError::JsonParseError)
    }

    /// Release the body. Dropping it has the same effect.
    pub fn close(self) {}

    /// Convert into a [`Stream`] of data chunks.
    pub fn into_stream(self) -> BodyStream {
        BodyStream { body: self }
    }
}

impl From<Bytes> for ResponseBody {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}

impl Read for ResponseBody {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data.advance(n);
        Ok(n)
    }
}

impl Body for ResponseBody {
    type Data = Bytes;
    type Error = Infallible;

    fn poll_frame(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Frame<Self::Data>, Self::Error>>> {
        let this = self.get_mut();
        if this.data.is_empty() {
            return Poll::Ready(None);
        }
        Poll::Ready(Some(Ok(Frame::data(std::mem::take(&mut this.data)))))
    }

    fn is_end_stream(&self) -> bool {
        self.data.is_empty()
    }

    fn size_hint(&self) -> SizeHint {
        SizeHint::with_exact(self.data.len() as u64)
    }
}

/// Stream adapter over a [`ResponseBody`]. Yields the whole snapshot as a
/// single chunk.
#[derive(Debug)]
pub struct BodyStream {
    body: ResponseBody,
}

impl Stream for BodyStream {
    type Item = Result<Bytes, Infallible>;

    fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let body = &mut self.get_mut().body;
        if body.data.is_empty() {
            return Poll::Ready(None);
        }
        Poll::Ready(Some(Ok(std::mem::take(&mut body.data))))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let chunks = usize::from(!self.body.data.is_empty());
        (chunks, Some(chunks))
    }
}
