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

//! Retrieval of upstream data.
//!
//! Everything that touches the network goes through the [`Fetch`] trait, so
//! that the loaders can be driven by an in-memory implementation in tests.
//! [`HttpFetcher`] is the real implementation.

use std::{future::Future, pin::Pin};

use isahc::{
    config::{Configurable, RedirectPolicy},
    AsyncReadResponseExt, HttpClient,
};

use crate::{
    error::{Error, NetworkErrorKind, Result, ResultIntoError},
    utils::BytesDisplay,
};

pub mod archive;
pub mod registry;

pub use archive::extract_member;
pub use registry::{NpmRegistry, PackageMetadata};

pub type ResultFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'a>>;

pub trait Fetch: std::fmt::Debug + Send + Sync {
    /// Retrieve the complete body found at `url`.
    fn get(&self, url: &str) -> ResultFuture<'_, Vec<u8>>;
}

/// Retrieve `url` and decode it as UTF-8.
pub async fn get_text(fetch: &dyn Fetch, url: &str) -> Result<String> {
    let bytes = fetch.get(url).await?;
    String::from_utf8(bytes).chain_err_summary(|| format!("Response from {url} is not UTF-8"))
}

#[derive(Debug)]
pub struct HttpFetcher {
    client: HttpClient,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = HttpClient::builder()
            .default_header("User-Agent", user_agent)
            .redirect_policy(RedirectPolicy::Limit(10))
            .build()?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn get(&self, url: &str) -> ResultFuture<'_, Vec<u8>> {
        let url = url.to_string();
        Box::pin(async move {
            log::info!("Fetching {}", url);
            let mut res = self
                .client
                .get_async(url.as_str())
                .await
                .chain_err_summary(|| format!("Could not fetch {url}"))?;
            if !res.status().is_success() {
                let kind: NetworkErrorKind = res.status().into();
                return Err(Error::new(format!(
                    "Request to {} failed with status {}",
                    url,
                    res.status()
                ))
                .set_kind(kind.into()));
            }
            let bytes = res
                .bytes()
                .await
                .chain_err_summary(|| format!("Could not read response body of {url}"))?;
            log::debug!("Received {} from {}", BytesDisplay(bytes.len()), url);
            Ok(bytes)
        })
    }
}
