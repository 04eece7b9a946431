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

/// Names for entries whose upstream description normalizes badly (`keycap: #`
/// and `keycap: *` both lose their only distinguishing character).
pub const UNICODE_OVERRIDES: &[(&str, &str)] = &[
    ("23-fe0f-20e3", "keycap: hash"),
    ("2a-fe0f-20e3", "keycap: asterisk"),
];

/// Fitzpatrick skin tone modifiers.
pub const SKIN_TONES: &[(&str, &str)] = &[
    ("1f3fb", "light_skin_tone"),
    ("1f3fc", "medium-light_skin_tone"),
    ("1f3fd", "medium_skin_tone"),
    ("1f3fe", "medium-dark_skin_tone"),
    ("1f3ff", "dark_skin_tone"),
];

pub fn name_override(codepoints: &str) -> Option<&'static str> {
    UNICODE_OVERRIDES
        .iter()
        .find(|(cps, _)| *cps == codepoints)
        .map(|(_, name)| *name)
}

pub fn skin_tone_label(codepoint: &str) -> Option<&'static str> {
    SKIN_TONES
        .iter()
        .find(|(cp, _)| *cp == codepoint)
        .map(|(_, label)| *label)
}
