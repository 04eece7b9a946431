//
// emojilib - codepoints module
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

//! Codepoint sequence normalization.
//!
//! A codepoint sequence is represented as lowercase hexadecimal scalar values
//! joined by `-`, e.g. `"1f468-200d-1f4bb"`. The two data sources disagree on
//! leading zeros (`0023` vs `23`) and on whether zero width joiners and
//! variation selectors are spelled out, so both have to be normalized before
//! they can be compared.

use crate::error::{Error, ErrorKind, Result};

/// Group separator.
pub const SEPARATOR: char = '-';
/// ZERO WIDTH JOINER, U+200D
pub const ZWJ: &str = "200d";
/// VARIATION SELECTOR-16, U+FE0F
pub const VS16: &str = "fe0f";

#[inline]
fn is_joiner_or_selector(group: &str) -> bool {
    group == ZWJ || group == VS16
}

/// Hex encode the Unicode scalar values of `text`.
///
/// ```rust
/// # use emojilib::codepoints::string_to_codepoints;
/// assert_eq!(string_to_codepoints("\u{1f468}\u{1f3fb}"), "1f468-1f3fb");
/// assert_eq!(string_to_codepoints("#\u{fe0f}\u{20e3}"), "23-fe0f-20e3");
/// ```
pub fn string_to_codepoints(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:x}", u32::from(c)))
        .collect::<Vec<String>>()
        .join("-")
}

/// Strip leading zeros from every group, leaving a single `0` for all-zero
/// groups.
pub fn strip_leading_zeros(seq: &str) -> String {
    seq.split(SEPARATOR)
        .map(|group| {
            let stripped = group.trim_start_matches('0');
            if stripped.is_empty() && !group.is_empty() {
                "0"
            } else {
                stripped
            }
        })
        .collect::<Vec<&str>>()
        .join("-")
}

/// Remove every ZWJ and VS16 group that follows another group.
///
/// A sequence cannot start with a joiner or a selector since there is nothing
/// for it to apply to; such a group is left in place and reported, together
/// with anything else that survived stripping, as
/// [`ErrorKind::LeftoverJoiner`].
pub fn strip_joiners_and_selectors(seq: &str) -> Result<String> {
    let stripped = seq
        .split(SEPARATOR)
        .enumerate()
        .filter(|(i, group)| *i == 0 || !is_joiner_or_selector(group))
        .map(|(_, group)| group)
        .collect::<Vec<&str>>()
        .join("-");
    if stripped.split(SEPARATOR).any(is_joiner_or_selector) {
        return Err(Error::new(format!(
            "Leftover ZWJ or VS16 in emoji {stripped} ({seq})"
        ))
        .set_kind(ErrorKind::LeftoverJoiner));
    }
    Ok(stripped)
}

/// Iterate over the interior groups of `seq`, i.e. all groups except the
/// first and the last.
pub fn interior_groups(seq: &str) -> impl Iterator<Item = &str> {
    let groups = seq.split(SEPARATOR).collect::<Vec<&str>>();
    let end = groups.len().saturating_sub(1);
    groups.into_iter().take(end).skip(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codepoints_string_to_codepoints() {
        assert_eq!(string_to_codepoints(""), "");
        assert_eq!(string_to_codepoints("\u{1f600}"), "1f600");
        // U+1F600 is a surrogate pair in UTF-16, it must still be one group.
        assert_eq!("\u{1f600}".encode_utf16().count(), 2);
        assert_eq!(
            string_to_codepoints("\u{1f468}\u{200d}\u{1f4bb}"),
            "1f468-200d-1f4bb"
        );
        assert_eq!(string_to_codepoints("\u{2764}\u{fe0f}"), "2764-fe0f");
        assert_eq!(string_to_codepoints("A"), "41");
    }

    #[test]
    fn test_codepoints_strip_leading_zeros() {
        assert_eq!(strip_leading_zeros("0023-20e3"), "23-20e3");
        assert_eq!(strip_leading_zeros("1f44d"), "1f44d");
        assert_eq!(strip_leading_zeros("00a9"), "a9");
        assert_eq!(strip_leading_zeros("0000"), "0");
        assert_eq!(strip_leading_zeros("0030-0000-20e3"), "30-0-20e3");
        assert_eq!(strip_leading_zeros("1f1e6-1f1e8"), "1f1e6-1f1e8");

        for seq in ["0023-20e3", "0000", "0-0-0", "1f3f3-fe0f-200d-1f308", "000a9"] {
            let stripped = strip_leading_zeros(seq);
            assert_eq!(
                stripped.split(SEPARATOR).count(),
                seq.split(SEPARATOR).count(),
                "{seq}"
            );
            assert!(stripped.split(SEPARATOR).all(|g| !g.is_empty()), "{seq}");
        }
    }

    #[test]
    fn test_codepoints_strip_joiners_and_selectors() {
        assert_eq!(
            strip_joiners_and_selectors("1f468-200d-1f4bb").unwrap(),
            "1f468-1f4bb"
        );
        assert_eq!(
            strip_joiners_and_selectors("1f3f3-fe0f-200d-1f308").unwrap(),
            "1f3f3-1f308"
        );
        assert_eq!(strip_joiners_and_selectors("1f600").unwrap(), "1f600");
        assert_eq!(
            strip_joiners_and_selectors("23-fe0f-20e3").unwrap(),
            "23-20e3"
        );
        // Only whole groups are considered.
        assert_eq!(
            strip_joiners_and_selectors("1fe0f-200da").unwrap(),
            "1fe0f-200da"
        );

        for seq in [
            "1f468-200d-1f4bb",
            "1f3f3-fe0f-200d-1f308",
            "1f9d1-1f3fb-200d-1f91d-200d-1f9d1-1f3ff",
            "2764-fe0f",
        ] {
            let once = strip_joiners_and_selectors(seq).unwrap();
            let twice = strip_joiners_and_selectors(&once).unwrap();
            assert_eq!(once, twice);
        }

        let err = strip_joiners_and_selectors("fe0f-1f600").unwrap_err();
        assert_eq!(err.kind, ErrorKind::LeftoverJoiner);
        let err = strip_joiners_and_selectors("200d").unwrap_err();
        assert_eq!(err.kind, ErrorKind::LeftoverJoiner);
    }

    #[test]
    fn test_codepoints_interior_groups() {
        assert_eq!(
            interior_groups("1f3c3-1f3fb-200d-27a1-fe0f").collect::<Vec<_>>(),
            vec!["1f3fb", "200d", "27a1"]
        );
        assert_eq!(interior_groups("1f44d-1f3fb").count(), 0);
        assert_eq!(interior_groups("1f44d").count(), 0);
        assert_eq!(interior_groups("").count(), 0);
    }
}
