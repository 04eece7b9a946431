//
// emojilib - reconcile module
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

//! Merge of GitHub short names and Unicode names.
//!
//! GitHub spells sequences without zero width joiners and variation
//! selectors, so its sequences are looked up by the stripped form of the
//! Unicode sequences. Every GitHub name is re-keyed onto the fully-qualified
//! Unicode sequence; Unicode names fill in for sequences GitHub does not
//! know about.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::{
    codepoints::strip_joiners_and_selectors,
    error::{Error, ErrorKind, Result},
    unicode::UnicodeMap,
    vendor::VendorMap,
};


/// Final annotation to fully-qualified codepoint sequence map, ordered by
/// name.
pub type AnnotationMap = BTreeMap<String, String>;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ReconcileStats {
    /// GitHub entries with codepoints.
    pub vendor_entries: usize,
    /// Named Unicode sequences.
    pub unicode_entries: usize,
    /// Distinct Unicode sequences that received a GitHub name.
    pub claimed: usize,
    /// Unicode sequences without a GitHub name.
    pub unicode_only: usize,
    /// Unicode fallback names that replaced a GitHub name.
    pub name_collisions: usize,
}

impl std::fmt::Display for ReconcileStats {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            fmt,
            "{} GitHub entries, {} Unicode entries, {} claimed, {} Unicode only, {} name \
             collisions",
            self.vendor_entries,
            self.unicode_entries,
            self.claimed,
            self.unicode_only,
            self.name_collisions
        )
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Reconciled {
    pub annotations: AnnotationMap,
    pub stats: ReconcileStats,
}

/// Stripped sequence to fully-qualified sequence.
pub fn stripped_index(unicode: &UnicodeMap) -> Result<HashMap<String, &str>> {
    let mut index: HashMap<String, &str> = HashMap::with_capacity(unicode.len());
    for cps in unicode.values() {
        let stripped = strip_joiners_and_selectors(cps)?;
        match index.get(&stripped) {
            Some(prev) if *prev != cps.as_str() => {
                return Err(Error::new(format!(
                    "Ambiguous Unicode emoji {} <-> {} (both are {})",
                    prev, cps, stripped
                ))
                .set_kind(ErrorKind::AmbiguousCodepoints));
            }
            Some(_) => {}
            None => {
                index.insert(stripped, cps.as_str());
            }
        }
    }
    Ok(index)
}

pub fn reconcile(vendor: &VendorMap, unicode: &UnicodeMap) -> Result<Reconciled> {
    let index = stripped_index(unicode)?;

    let mut annotations = AnnotationMap::new();
    let mut claimed: HashSet<&str> = HashSet::with_capacity(vendor.len());
    for (name, cps) in vendor {
        let Some(&real_cps) = index.get(cps.as_str()) else {
            return Err(Error::new(format!(
                "GitHub emoji {name} ({cps}) has no Unicode equivalent!"
            ))
            .set_kind(ErrorKind::UnmatchedVendorEntry));
        };
        annotations.insert(name.clone(), real_cps.to_string());
        claimed.insert(real_cps);
    }

    let mut stats = ReconcileStats {
        vendor_entries: vendor.len(),
        unicode_entries: unicode.len(),
        claimed: claimed.len(),
        ..ReconcileStats::default()
    };
    for (name, cps) in unicode {
        if claimed.contains(cps.as_str()) {
            continue;
        }
        stats.unicode_only += 1;
        if let Some(prev) = annotations.insert(name.clone(), cps.clone()) {
            // Left as is: the Unicode name replaces the GitHub one.
            stats.name_collisions += 1;
            log::warn!(
                "Unicode emoji name {} ({}) replaces GitHub emoji of the same name ({})",
                name,
                cps,
                prev
            );
        }
    }

    Ok(Reconciled { annotations, stats })
}
