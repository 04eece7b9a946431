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

//! An error object for `emojilib`
//!
//! Every failure of a generation run is fatal, so there is no recovery
//! machinery here: an [`Error`] carries a human readable description, an
//! optional summary line, the underlying cause if there is one, and an
//! [`ErrorKind`] so that callers and tests can tell failures apart.

use std::{borrow::Cow, fmt, io, result, str, string, sync::Arc};

pub mod network;
pub use network::NetworkErrorKind;

pub type Result<T> = result::Result<T, Error>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ErrorKind {
    #[default]
    None,
    /// Transport error or unsuccessful status from an HTTP request.
    Network(NetworkErrorKind),
    /// Named member is missing from a package archive.
    MemberNotFound,
    /// The exported data literal could not be located in the package file.
    PatternMismatch,
    /// Two emoji records normalize to the same name.
    AmbiguousName,
    /// Two fully-qualified sequences share the same stripped form.
    AmbiguousCodepoints,
    /// A vendor sequence has no Unicode equivalent.
    UnmatchedVendorEntry,
    /// A joiner or selector group survived stripping.
    LeftoverJoiner,
    /// The facing-right skin tone fixup is no longer applicable upstream.
    StaleFixup,
    /// Malformed JSON or package metadata.
    Parse,
    /// Invalid configuration file.
    Configuration,
    Io,
    Bug,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "Unspecified error",
            Self::Network(inner) => inner.as_str(),
            Self::MemberNotFound => "Archive member not found",
            Self::PatternMismatch => "Pattern mismatch",
            Self::AmbiguousName => "Ambiguous emoji name",
            Self::AmbiguousCodepoints => "Ambiguous emoji codepoints",
            Self::UnmatchedVendorEntry => "Vendor emoji has no Unicode equivalent",
            Self::LeftoverJoiner => "Leftover joiner or variation selector",
            Self::StaleFixup => "Stale upstream data fixup",
            Self::Parse => "Parse error",
            Self::Configuration => "Configuration error",
            Self::Io => "IO error",
            Self::Bug => "Bug, please report this!",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{}", self.as_str())
    }
}

#[derive(Clone, Debug)]
pub struct Error {
    pub summary: Option<Cow<'static, str>>,
    pub details: Cow<'static, str>,
    pub source: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    pub kind: ErrorKind,
}

pub trait IntoError {
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>;

    fn set_err_kind(self, kind: ErrorKind) -> Error;
}

pub trait ResultIntoError<T> {
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>;

    fn chain_err_kind(self, kind: ErrorKind) -> Result<T>;
}

impl<I: Into<Error>> IntoError for I {
    #[inline]
    fn set_err_summary<M>(self, msg: M) -> Error
    where
        M: Into<Cow<'static, str>>,
    {
        let err: Error = self.into();
        err.set_summary(msg)
    }

    #[inline]
    fn set_err_kind(self, kind: ErrorKind) -> Error {
        let err: Error = self.into();
        err.set_kind(kind)
    }
}

impl<T, I: Into<Error>> ResultIntoError<T> for result::Result<T, I> {
    #[inline]
    fn chain_err_summary<M, F>(self, msg_fn: F) -> Result<T>
    where
        F: Fn() -> M,
        M: Into<Cow<'static, str>>,
    {
        self.map_err(|err| err.set_err_summary(msg_fn()))
    }

    #[inline]
    fn chain_err_kind(self, kind: ErrorKind) -> Result<T> {
        self.map_err(|err| err.set_err_kind(kind))
    }
}

impl Error {
    pub fn new<M>(msg: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        Self {
            summary: None,
            details: msg.into(),
            source: None,
            kind: ErrorKind::None,
        }
    }

    pub fn set_summary<M>(mut self, summary: M) -> Self
    where
        M: Into<Cow<'static, str>>,
    {
        if let Some(old_summary) = self.summary.take() {
            self.summary = Some(format!("{}. {old_summary}", summary.into()).into());
        } else {
            self.summary = Some(summary.into());
        }
        self
    }

    pub fn set_source(
        mut self,
        new_val: Option<Arc<dyn std::error::Error + Send + Sync + 'static>>,
    ) -> Self {
        self.source = new_val;
        self
    }

    pub fn set_kind(mut self, new_val: ErrorKind) -> Self {
        self.kind = new_val;
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(summary) = self.summary.as_ref() {
            writeln!(f, "Summary: {}", summary)?;
        }
        write!(f, "{}", self.details)?;
        if !matches!(self.kind, ErrorKind::None) {
            write!(f, "\nKind: {}", self.kind)?;
        }
        if let Some(source) = self.source.as_ref() {
            write!(f, "\nCaused by: {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|s| &(*(*s)) as _)
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(kind: io::Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::Io)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<string::FromUtf8Error> for Error {
    #[inline]
    fn from(kind: string::FromUtf8Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::Parse)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<str::Utf8Error> for Error {
    #[inline]
    fn from(kind: str::Utf8Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::Parse)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<serde_json::error::Error> for Error {
    #[inline]
    fn from(kind: serde_json::error::Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::Parse)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<isahc::Error> for Error {
    #[inline]
    fn from(val: isahc::Error) -> Self {
        let kind: NetworkErrorKind = val.kind().into();
        Self::new(val.to_string())
            .set_kind(ErrorKind::Network(kind))
            .set_source(Some(Arc::new(val)))
    }
}

impl From<isahc::http::Error> for Error {
    #[inline]
    fn from(val: isahc::http::Error) -> Self {
        Self::new(val.to_string())
            .set_kind(ErrorKind::Network(NetworkErrorKind::InvalidRequest))
            .set_source(Some(Arc::new(val)))
    }
}

impl From<regex::Error> for Error {
    #[inline]
    fn from(kind: regex::Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::Bug)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<toml::de::Error> for Error {
    #[inline]
    fn from(kind: toml::de::Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::Configuration)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<toml::ser::Error> for Error {
    #[inline]
    fn from(kind: toml::ser::Error) -> Self {
        Self::new(kind.to_string())
            .set_kind(ErrorKind::Bug)
            .set_source(Some(Arc::new(kind)))
    }
}

impl From<Box<dyn std::error::Error + Sync + Send + 'static>> for Error {
    #[inline]
    fn from(kind: Box<dyn std::error::Error + Sync + Send + 'static>) -> Self {
        Self::new(kind.to_string()).set_source(Some(kind.into()))
    }
}

impl From<&str> for Error {
    #[inline]
    fn from(kind: &str) -> Self {
        Self::new(kind.to_string())
    }
}

impl From<String> for Error {
    #[inline]
    fn from(kind: String) -> Self {
        Self::new(kind)
    }
}
