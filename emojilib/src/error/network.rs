//
// emojilib - error module
//
// Copyright 2017 Emmanouil Pitsidianakis <manos@pitsidianak.is>
//
// This file is part of emojimap.
//
// emojimap is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// emojimap is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with emojimap. If not, see <http://www.gnu.org/licenses/>.
//
// SPDX-License-Identifier: EUPL-1.2 OR GPL-3.0-or-later

//! Error kinds for network related errors.

use isahc::http::StatusCode;

use super::ErrorKind;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NetworkErrorKind {
    /// Unspecified
    #[default]
    None,
    /// Name lookup of host failed.
    HostLookupFailed,
    /// Bad client Certificate
    BadClientCertificate,
    /// Bad server certificate
    BadServerCertificate,
    /// Client initialization
    ClientInitialization,
    /// Connection failed
    ConnectionFailed,
    /// Invalid content encoding
    InvalidContentEncoding,
    /// Invalid credentials
    InvalidCredentials,
    /// Invalid request
    InvalidRequest,
    /// IO Error
    Io,
    /// Protocol violation
    ProtocolViolation,
    /// Request body not rewindable
    RequestBodyNotRewindable,
    /// Connection (not request) timeout.
    Timeout,
    /// Too many redirects
    TooManyRedirects,
    /// Invalid TLS connection
    InvalidTLSConnection,
    /// HTTP status code 400 Bad Request
    BadRequest,
    /// HTTP status code 401 Unauthorized
    Unauthorized,
    /// HTTP status code 403 Forbidden
    Forbidden,
    /// HTTP status code 404 Not Found
    NotFound,
    /// HTTP status code 410 Gone
    Gone,
    /// HTTP status code 429 Too Many Requests
    TooManyRequests,
    /// HTTP status code 500 Internal Server Error
    InternalServerError,
    /// HTTP status code 502 Bad Gateway
    BadGateway,
    /// HTTP status code 503 Service Unavailable
    ServiceUnavailable,
    /// HTTP status code 504 Gateway Timeout
    GatewayTimeout,
    /// Any other unsuccessful status code.
    UnexpectedStatus,
}

impl NetworkErrorKind {
    pub const fn as_str(&self) -> &'static str {
        use NetworkErrorKind::*;
        match self {
            None => "Unspecified network error",
            HostLookupFailed => "Name lookup of host failed",
            BadClientCertificate => "Bad client certificate",
            BadServerCertificate => "Bad server Certificate",
            ClientInitialization => "Client initialization",
            ConnectionFailed => "Connection failed",
            InvalidContentEncoding => "Invalid content encoding",
            InvalidCredentials => "Invalid credentials",
            InvalidRequest => "Invalid request",
            Io => "IO error",
            ProtocolViolation => "Protocol violation",
            RequestBodyNotRewindable => "Request body not rewindable",
            Timeout => "Connection (not request) timeout",
            TooManyRedirects => "Too many redirects",
            InvalidTLSConnection => "Invalid TLS connection",
            BadRequest => "Bad request",
            Unauthorized => "Unauthorized",
            Forbidden => "Forbidden",
            NotFound => "Not found",
            Gone => "Gone",
            TooManyRequests => "Too many requests",
            InternalServerError => "Internal server error",
            BadGateway => "Bad gateway",
            ServiceUnavailable => "Service unavailable",
            GatewayTimeout => "Gateway timeout",
            UnexpectedStatus => "Unexpected HTTP status",
        }
    }
}

impl From<StatusCode> for NetworkErrorKind {
    fn from(val: StatusCode) -> Self {
        match val {
            StatusCode::BAD_REQUEST => Self::BadRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::NotFound,
            StatusCode::GONE => Self::Gone,
            StatusCode::TOO_MANY_REQUESTS => Self::TooManyRequests,
            StatusCode::INTERNAL_SERVER_ERROR => Self::InternalServerError,
            StatusCode::BAD_GATEWAY => Self::BadGateway,
            StatusCode::SERVICE_UNAVAILABLE => Self::ServiceUnavailable,
            StatusCode::GATEWAY_TIMEOUT => Self::GatewayTimeout,
            other if other.is_success() => Self::None,
            _ => Self::UnexpectedStatus,
        }
    }
}

impl From<&isahc::error::ErrorKind> for NetworkErrorKind {
    #[inline]
    fn from(val: &isahc::error::ErrorKind) -> Self {
        use isahc::error::ErrorKind::*;
        match val {
            BadClientCertificate => Self::BadClientCertificate,
            BadServerCertificate => Self::BadServerCertificate,
            ClientInitialization => Self::ClientInitialization,
            ConnectionFailed => Self::ConnectionFailed,
            InvalidContentEncoding => Self::InvalidContentEncoding,
            InvalidCredentials => Self::InvalidCredentials,
            InvalidRequest => Self::BadRequest,
            Io => Self::Io,
            NameResolution => Self::HostLookupFailed,
            ProtocolViolation => Self::ProtocolViolation,
            RequestBodyNotRewindable => Self::RequestBodyNotRewindable,
            Timeout => Self::Timeout,
            TlsEngine => Self::InvalidTLSConnection,
            TooManyRedirects => Self::TooManyRedirects,
            _ => Self::None,
        }
    }
}

impl From<NetworkErrorKind> for ErrorKind {
    #[inline]
    fn from(kind: NetworkErrorKind) -> Self {
        Self::Network(kind)
    }
}
