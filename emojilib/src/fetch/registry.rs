//
// emojilib - fetch module
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

//! Minimal npm registry client.
//!
//! Only the parts of the package document that lead to the latest tarball
//! are deserialized:
//!
//! ```json
//! {
//!   "dist-tags": { "latest": "4.0.4" },
//!   "versions": {
//!     "4.0.4": { "dist": { "tarball": "https://registry.npmjs.org/..." } }
//!   }
//! }
//! ```

use indexmap::IndexMap;

use super::{archive::extract_member, get_text, Fetch};
use crate::{
    error::{Error, ErrorKind, Result},
    utils::{deserialize_from_str, BytesDisplay},
};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Dist {
    pub tarball: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct VersionMetadata {
    pub dist: Dist,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct PackageMetadata {
    #[serde(rename = "dist-tags")]
    pub dist_tags: IndexMap<String, String>,
    pub versions: IndexMap<String, VersionMetadata>,
}

impl PackageMetadata {
    pub fn latest_version(&self) -> Result<&str> {
        self.dist_tags
            .get("latest")
            .map(String::as_str)
            .ok_or_else(|| {
                Error::new("Package metadata has no `latest` dist-tag").set_kind(ErrorKind::Parse)
            })
    }

    /// Metadata of the version tagged `latest`.
    pub fn latest(&self) -> Result<&VersionMetadata> {
        let version = self.latest_version()?;
        self.versions.get(version).ok_or_else(|| {
            Error::new(format!(
                "Package metadata tags version {version} as latest but does not list it"
            ))
            .set_kind(ErrorKind::Parse)
        })
    }
}

#[derive(Debug)]
pub struct NpmRegistry<'f> {
    fetch: &'f dyn Fetch,
    base_url: String,
}

impl<'f> NpmRegistry<'f> {
    pub fn new(fetch: &'f dyn Fetch, base_url: &str) -> Self {
        Self {
            fetch,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn package_url(&self, package_name: &str) -> String {
        format!("{}/{}", self.base_url, package_name)
    }

    pub async fn package_metadata(&self, package_name: &str) -> Result<PackageMetadata> {
        let text = get_text(self.fetch, &self.package_url(package_name)).await?;
        deserialize_from_str(&text, "npm package metadata")
    }

    /// Retrieve the raw bytes of `member` from the latest published tarball of
    /// `package_name`.
    pub async fn package_file(&self, package_name: &str, member: &str) -> Result<Vec<u8>> {
        let metadata = self.package_metadata(package_name).await?;
        log::info!(
            "Latest version of {} is {}",
            package_name,
            metadata.latest_version()?
        );
        let tarball = &metadata.latest()?.dist.tarball;
        let archive = self.fetch.get(tarball).await?;
        let bytes = extract_member(&archive, member)?;
        log::debug!(
            "Extracted {} ({}) from {}",
            member,
            BytesDisplay(bytes.len()),
            tarball
        );
        Ok(bytes)
    }
}
