//
// emojilib - vendor module
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

//! GitHub emoji short names.
//!
//! `https://api.github.com/emojis` maps each short name to an image URL.
//! Images of standard emoji are named after their codepoints:
//!
//! ```json
//! {
//!   "+1": "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8",
//!   "hash": "https://github.githubassets.com/images/icons/emoji/unicode/0023-20e3.png?v8",
//!   "octocat": "https://github.githubassets.com/images/icons/emoji/octocat.png?v8"
//! }
//! ```
//!
//! Custom images such as `octocat` have no codepoints and are skipped.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::{
    codepoints::strip_leading_zeros,
    error::{Error, Result},
    fetch::{get_text, Fetch},
    utils::deserialize_from_str,
};

/// Short name to codepoint sequence as spelled by the vendor, in document
/// order.
pub type VendorMap = IndexMap<String, String>;

fn unicode_image() -> Result<&'static Regex> {
    static UNICODE_IMAGE: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    UNICODE_IMAGE
        .get_or_init(|| Regex::new(r"/unicode/(.+?)\.png"))
        .as_ref()
        .map_err(|err| Error::from(err.clone()))
}

/// Codepoint sequence encoded in an image URL, if there is one.
pub fn codepoints_from_url(url: &str) -> Result<Option<String>> {
    Ok(unicode_image()?
        .captures(url)
        .and_then(|c| c.get(1))
        .map(|m| strip_leading_zeros(m.as_str())))
}

pub fn vendor_data_from_json(text: &str) -> Result<VendorMap> {
    let raw: IndexMap<String, String> = deserialize_from_str(text, "GitHub emoji map")?;
    let mut result = VendorMap::with_capacity(raw.len());
    for (name, url) in raw {
        match codepoints_from_url(&url)? {
            Some(cps) => {
                result.insert(name, cps);
            }
            None => log::trace!("Skipping GitHub emoji {} ({})", name, url),
        }
    }
    Ok(result)
}

pub async fn get_vendor_data(fetch: &dyn Fetch, url: &str) -> Result<VendorMap> {
    let text = get_text(fetch, url).await?;
    let result = vendor_data_from_json(&text)?;
    log::info!("Loaded {} GitHub emoji", result.len());
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_vendor_codepoints_from_url() {
        assert_eq!(
            codepoints_from_url(
                "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8"
            )
            .unwrap()
            .as_deref(),
            Some("1f44d")
        );
        assert_eq!(
            codepoints_from_url(
                "https://github.githubassets.com/images/icons/emoji/unicode/0023-20e3.png?v8"
            )
            .unwrap()
            .as_deref(),
            Some("23-20e3")
        );
        assert_eq!(
            codepoints_from_url(
                "https://github.githubassets.com/images/icons/emoji/unicode/1f468-1f4bb.png"
            )
            .unwrap()
            .as_deref(),
            Some("1f468-1f4bb")
        );
        assert_eq!(
            codepoints_from_url("https://github.githubassets.com/images/icons/emoji/octocat.png?v8")
                .unwrap(),
            None
        );
        assert_eq!(
            codepoints_from_url("https://example.com/unicode/1f600.gif").unwrap(),
            None
        );
    }

    #[test]
    fn test_vendor_data_from_json() {
        let result = vendor_data_from_json(
            r#"{
  "+1": "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8",
  "100": "https://github.githubassets.com/images/icons/emoji/unicode/1f4af.png?v8",
  "1234": "https://github.githubassets.com/images/icons/emoji/unicode/1f522.png?v8",
  "accessibility": "https://github.githubassets.com/images/icons/emoji/accessibility.png?v8",
  "hash": "https://github.githubassets.com/images/icons/emoji/unicode/0023-20e3.png?v8"
}"#,
        )
        .unwrap();
        assert_eq!(
            result.into_iter().collect::<Vec<_>>(),
            vec![
                ("+1".to_string(), "1f44d".to_string()),
                ("100".to_string(), "1f4af".to_string()),
                ("1234".to_string(), "1f522".to_string()),
                ("hash".to_string(), "23-20e3".to_string()),
            ]
        );

        assert_eq!(
            vendor_data_from_json(r#"["not", "an", "object"]"#)
                .unwrap_err()
                .kind,
            ErrorKind::Parse
        );
    }
}
