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

//! Tarball member extraction.

use std::io::Read;

use flate2::read::GzDecoder;

use crate::error::{Error, ErrorKind, Result, ResultIntoError};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Return the contents of the entry named `member` in the tar archive
/// `archive`, which may be gzip compressed.
///
/// Entries are streamed until `member` is found; only that entry is buffered.
pub fn extract_member(archive: &[u8], member: &str) -> Result<Vec<u8>> {
    let reader: Box<dyn Read + '_> = if archive.starts_with(&GZIP_MAGIC) {
        Box::new(GzDecoder::new(archive))
    } else {
        Box::new(archive)
    };
    let mut archive = tar::Archive::new(reader);
    for entry in archive
        .entries()
        .chain_err_summary(|| "Could not read tar archive")?
    {
        let mut entry = entry.chain_err_summary(|| "Could not read tar archive entry")?;
        if entry.path_bytes().as_ref() != member.as_bytes() {
            continue;
        }
        // The header size is untrusted; let the buffer grow with the data.
        let expected = entry.size();
        let mut buf = Vec::new();
        entry
            .read_to_end(&mut buf)
            .chain_err_summary(|| format!("Could not read tar archive member {member}"))?;
        if (buf.len() as u64) < expected {
            return Err(Error::new(format!(
                "Tar archive member {member} is truncated: header claims {expected} bytes, \
                 archive holds {}",
                buf.len()
            ))
            .set_kind(ErrorKind::Parse));
        }
        return Ok(buf);
    }
    Err(
        Error::new(format!("Member {member} not found in tar archive"))
            .set_kind(ErrorKind::MemberNotFound),
    )
}
