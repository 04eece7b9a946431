//
// emojilib - unicode module
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

//! Unicode emoji data from the `unicode-emoji` npm package.
//!
//! The package ships a single JavaScript module with one exported object
//! literal, which happens to be valid JSON:
//!
//! ```text
//! export default {"emojis":[{"emoji":"😀","description":"grinning face",...},...]};
//! ```
//!
//! Each record may carry `variations` (skin tones, genders) which are records
//! themselves. Every record in the tree gets a name derived from its
//! description, and the result is a map from name to fully-qualified codepoint
//! sequence.

use std::sync::OnceLock;

use indexmap::{map::Entry, IndexMap};
use regex::Regex;

use crate::{
    codepoints::{interior_groups, string_to_codepoints},
    error::{Error, ErrorKind, Result},
    fetch::NpmRegistry,
    utils::deserialize_from_str,
};

pub mod tables;
pub use tables::{name_override, skin_tone_label, SKIN_TONES, UNICODE_OVERRIDES};


/// Name to fully-qualified codepoint sequence, in document order.
pub type UnicodeMap = IndexMap<String, String>;

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct EmojiRecord {
    pub emoji: String,
    pub description: String,
    #[serde(default)]
    pub variations: Vec<EmojiRecord>,
}

impl EmojiRecord {
    pub fn new(emoji: &str, description: &str) -> Self {
        Self {
            emoji: emoji.to_string(),
            description: description.to_string(),
            variations: vec![],
        }
    }

    pub fn with_variations(mut self, variations: Vec<EmojiRecord>) -> Self {
        self.variations = variations;
        self
    }
}

#[derive(Clone, Debug, Deserialize)]
struct EmojiData {
    emojis: Vec<EmojiRecord>,
}

fn package_extract() -> Result<&'static Regex> {
    static PACKAGE_EXTRACT: OnceLock<std::result::Result<Regex, regex::Error>> = OnceLock::new();
    PACKAGE_EXTRACT
        .get_or_init(|| Regex::new(r"(?m)^export default (\{.*\});$"))
        .as_ref()
        .map_err(|err| Error::from(err.clone()))
}

/// Locate the object literal exported by the package module.
pub fn extract_data_literal(source: &str) -> Result<&str> {
    package_extract()?
        .captures(source)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            Error::new("Could not extract emoji data").set_kind(ErrorKind::PatternMismatch)
        })
}

pub fn parse_records(literal: &str) -> Result<Vec<EmojiRecord>> {
    let data: EmojiData = deserialize_from_str(literal, "Unicode emoji data")?;
    Ok(data.emojis)
}

/// Lowercase, drop everything except `[a-z0-9 -]`, and replace spaces with
/// underscores.
pub fn normalize_name(description: &str) -> String {
    description
        .to_lowercase()
        .chars()
        .filter(|c| matches!(c, 'a'..='z' | '0'..='9' | ' ' | '-'))
        .map(|c| if c == ' ' { '_' } else { c })
        .collect()
}

/// Several `*_facing_right` emoji with skin tone modifiers are described
/// without their skin tone (as of Unicode 15.1), which makes them collide
/// with their unmodified base. Append the modifier label ourselves.
pub fn fixup_name(mut name: String, codepoints: &str) -> Result<String> {
    if !name.ends_with("_facing_right") {
        return Ok(name);
    }
    let Some(label) = interior_groups(codepoints).find_map(skin_tone_label) else {
        return Ok(name);
    };
    if name.contains("skin_tone") {
        return Err(Error::new(format!(
            "Right-facing emoji {name} ({codepoints}) includes unexpected skin tone qualifier; \
             check if this fixup is still necessary"
        ))
        .set_kind(ErrorKind::StaleFixup));
    }
    name.push('_');
    name.push_str(label);
    Ok(name)
}

/// Name `record` and all its variations, depth first, and insert them in
/// `result`.
pub fn process_emoji(record: &EmojiRecord, result: &mut UnicodeMap) -> Result<()> {
    let cps = string_to_codepoints(&record.emoji);
    let name = normalize_name(name_override(&cps).unwrap_or(record.description.as_str()));
    let name = fixup_name(name, &cps)?;
    match result.entry(name) {
        Entry::Occupied(entry) if entry.get() != &cps => {
            return Err(Error::new(format!(
                "Ambiguous Unicode emoji name {}: {} <-> {}",
                entry.key(),
                entry.get(),
                cps
            ))
            .set_kind(ErrorKind::AmbiguousName));
        }
        Entry::Occupied(_) => {}
        Entry::Vacant(entry) => {
            entry.insert(cps);
        }
    }

    for variation in &record.variations {
        process_emoji(variation, result)?;
    }
    Ok(())
}

/// Build the name map out of top level records.
pub fn unicode_data_from_records(records: &[EmojiRecord]) -> Result<UnicodeMap> {
    let mut result = UnicodeMap::default();
    for record in records {
        process_emoji(record, &mut result)?;
    }
    Ok(result)
}

/// Build the name map out of the package module's source text.
pub fn unicode_data_from_source(source: &str) -> Result<UnicodeMap> {
    let records = parse_records(extract_data_literal(source)?)?;
    log::debug!("Parsed {} top level Unicode emoji records", records.len());
    unicode_data_from_records(&records)
}

/// Retrieve the latest `package_name` from the registry and build the name
/// map out of its `member` file.
pub async fn get_unicode_data(
    registry: &NpmRegistry<'_>,
    package_name: &str,
    member: &str,
) -> Result<UnicodeMap> {
    let raw_data = registry.package_file(package_name, member).await?;
    let source = std::str::from_utf8(&raw_data)?;
    let result = unicode_data_from_source(source)?;
    log::info!("Loaded {} Unicode emoji", result.len());
    Ok(result)
}
