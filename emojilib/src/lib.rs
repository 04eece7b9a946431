//
// emojilib
//
// Copyright 2024 Emmanouil Pitsidianakis <manos@pitsidianak.is>
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

#![deny(
    rustdoc::redundant_explicit_links,
    /* groups */
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    /* restriction */
    clippy::dbg_macro,
    clippy::as_underscore,
    /* rustdoc */
    rustdoc::broken_intra_doc_links,
    /* pedantic */
    clippy::doc_markdown,
    clippy::expect_fun_call,
    clippy::or_fun_call,
)]

//! Generation of a table mapping emoji short names to Unicode codepoint
//! sequences.
//!
//! ## Description
//!
//! Two upstream sources are combined:
//! - GitHub's emoji API, which maps GitHub short names (`+1`, `thumbsup`) to
//!   image URLs named after the emoji's codepoints (see module [`vendor`])
//! - The `unicode-emoji` npm package, which lists every emoji with its CLDR
//!   description and its variations (see module [`unicode`])
//!
//! GitHub's sequences omit zero width joiners and variation selectors, so they
//! are matched against the Unicode ones after normalization (see modules
//! [`codepoints`] and [`reconcile`]). The resulting table holds every GitHub
//! name plus a derived name for every emoji GitHub does not know about, each
//! mapped to the fully-qualified sequence, and is written as a CommonJS module
//! (see module [`emit`]).
//!
//! Other exports are
//! - HTTP, npm registry and tarball access (see module [`fetch`])
//! - The complete pipeline (see module [`generate`](mod@generate))
//! - Configuration (see module [`conf`])

pub mod codepoints;
pub mod conf;
pub use conf::GeneratorConf;
pub mod emit;
pub mod error;
pub use error::*;
pub mod fetch;
pub mod generate;
pub use generate::{generate, run, run_with};
pub mod reconcile;
pub use reconcile::{AnnotationMap, ReconcileStats, Reconciled};
pub mod unicode;
pub mod utils;
pub use utils::logging::{LogLevel, StderrLogger};
pub mod vendor;

#[macro_use]
extern crate serde_derive;
pub extern crate futures;
pub extern crate indexmap;
pub extern crate log;
