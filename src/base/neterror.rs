use thiserror::Error;

/// Network error codes.
///
/// These are the failures a test can inject into a
/// [`MockTransport`](crate::mock::MockTransport): connection, DNS, TLS and
/// timeout errors, plus the few errors the client and body helpers return
/// themselves. Variants that map to `net_error_list.h` keep Chromium's numeric
/// codes so an injected failure reads the same as one produced by a real
/// network stack. Codes specific to this crate start at -900.
///
/// To inject an error that no code under test could produce on its own, use
/// `Unknown` with a code of your choosing; it compares equal only to itself.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum NetError {
    // Connection Errors
    #[error("Connection closed (TCP FIN)")]
    ConnectionClosed,
    #[error("Connection reset (TCP RST)")]
    ConnectionReset,
    #[error("Connection refused")]
    ConnectionRefused,
    #[error("Connection aborted")]
    ConnectionAborted,
    #[error("Connection failed")]
    ConnectionFailed,
    #[error("Name not resolved")]
    NameNotResolved,
    #[error("Internet disconnected")]
    InternetDisconnected,
    #[error("SSL protocol error")]
    SslProtocolError,
    #[error("Address unreachable")]
    AddressUnreachable,
    #[error("Connection timed out")]
    ConnectionTimedOut,
    #[error("Proxy connection failed")]
    ProxyConnectionFailed,
    #[error("Network access denied")]
    NetworkAccessDenied,

    // Certificate Errors
    #[error("Certificate authority invalid")]
    CertAuthorityInvalid,

    // HTTP Errors
    #[error("Invalid URL")]
    InvalidUrl,
    #[error("Invalid response")]
    InvalidResponse,
    #[error("Empty response")]
    EmptyResponse,

    // Body Errors
    #[error("Response body unavailable")]
    HttpBodyError,
    #[error("Response body is not valid UTF-8")]
    InvalidUtf8,
    #[error("Response body is not valid JSON")]
    JsonParseError,

    /// Any other code, including test-chosen ones.
    #[error("Unknown network error {0}")]
    Unknown(i32),
}

impl NetError {
    pub fn as_i32(&self) -> i32 {
        match self {
            NetError::ConnectionClosed => -100,
            NetError::ConnectionReset => -101,
            NetError::ConnectionRefused => -102,
            NetError::ConnectionAborted => -103,
            NetError::ConnectionFailed => -104,
            NetError::NameNotResolved => -105,
            NetError::InternetDisconnected => -106,
            NetError::SslProtocolError => -107,
            NetError::AddressUnreachable => -109,
            NetError::ConnectionTimedOut => -118,
            NetError::ProxyConnectionFailed => -130,
            NetError::NetworkAccessDenied => -138,

            NetError::CertAuthorityInvalid => -202,

            NetError::InvalidUrl => -300,
            NetError::InvalidResponse => -320,
            NetError::EmptyResponse => -324,

            // Crate-specific codes
            NetError::HttpBodyError => -900,
            NetError::InvalidUtf8 => -901,
            NetError::JsonParseError => -902,
            NetError::Unknown(code) => *code,
        }
    }
}

impl From<i32> for NetError {
    fn from(code: i32) -> Self {
        match code {
            -100 => NetError::ConnectionClosed,
            -101 => NetError::ConnectionReset,
            -102 => NetError::ConnectionRefused,
            -103 => NetError::ConnectionAborted,
            -104 => NetError::ConnectionFailed,
            -105 => NetError::NameNotResolved,
            -106 => NetError::InternetDisconnected,
            -107 => NetError::SslProtocolError,
            -109 => NetError::AddressUnreachable,
            -118 => NetError::ConnectionTimedOut,
            -130 => NetError::ProxyConnectionFailed,
            -138 => NetError::NetworkAccessDenied,
            -202 => NetError::CertAuthorityInvalid,
            -300 => NetError::InvalidUrl,
            -320 => NetError::InvalidResponse,
            -324 => NetError::EmptyResponse,
            -900 => NetError::HttpBodyError,
            -901 => NetError::InvalidUtf8,
            -902 => NetError::JsonParseError,
            _ => NetError::Unknown(code),
        }
    }
}
