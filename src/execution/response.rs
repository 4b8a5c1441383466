//! Response envelope.
//!
//! The transport's body stream is drained into memory before any
//! classification happens, so the status check and the decoder can both look
//! at the same bytes.

use crate::context::RequestContext;
use crate::error::Error;
use crate::execution::http::TransportResponse;
use futures::StreamExt;
use reqwest::header::{CONTENT_LENGTH, HeaderMap};

/// Fully buffered HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl ResponseEnvelope {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Declared `Content-Length`, if present and numeric.
    pub fn content_length(&self) -> Option<u64> {
        declared_length(&self.headers)
    }

    /// Drain `response` into an envelope.
    ///
    /// Any failure yields `Error::Read` carrying the bytes received so far.
    /// A body that stops short of the declared `Content-Length` is reported as
    /// `unexpected EOF` whatever the transport said; cancellation and deadline
    /// expiry keep their own cause.
    pub async fn drain(ctx: &RequestContext, response: TransportResponse) -> Result<Self, Error> {
        let TransportResponse {
            status,
            headers,
            mut body,
        } = response;
        let declared = declared_length(&headers);
        let mut buf = Vec::with_capacity(
            declared
                .and_then(|n| usize::try_from(n).ok())
                .unwrap_or(0)
                .min(MAX_PREALLOCATION),
        );

        loop {
            match ctx.run(async { Ok(body.next().await) }).await {
                Ok(Some(Ok(chunk))) => buf.extend_from_slice(&chunk),
                Ok(None) => break,
                Ok(Some(Err(e))) => {
                    let cause = if is_short(declared, buf.len()) {
                        UNEXPECTED_EOF.to_string()
                    } else {
                        e.to_string()
                    };
                    return Err(Error::read(cause, Self::partial(status, headers, buf)));
                }
                Err(e) => {
                    return Err(Error::read(
                        e.to_string(),
                        Self::partial(status, headers, buf),
                    ));
                }
            }
        }

        if is_short(declared, buf.len()) {
            return Err(Error::read(
                UNEXPECTED_EOF,
                Self::partial(status, headers, buf),
            ));
        }

        Ok(Self {
            status,
            headers,
            body: buf,
        })
    }

    fn partial(status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }
}

const UNEXPECTED_EOF: &str = "unexpected EOF";
const MAX_PREALLOCATION: usize = 1 << 20;

fn declared_length(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_LENGTH)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

fn is_short(declared: Option<u64>, received: usize) -> bool {
    declared.is_some_and(|n| (received as u64) < n)
}
