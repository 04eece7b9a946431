//
// emojilib - emit module
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

//! Output of the generated table as a CommonJS module.

use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    error::{Error, ErrorKind, Result, ResultIntoError},
    reconcile::AnnotationMap,
    utils::BytesDisplay,
};

pub const EXPORT_PREFIX: &str = "module.exports = ";
pub const EXPORT_SUFFIX: &str = ";\n";

/// `Pathbuf` or standard output (`-` operand).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OutputDestination {
    Path(PathBuf),
    Stdout,
}

impl From<&Path> for OutputDestination {
    fn from(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::Path(path.to_path_buf())
        }
    }
}

impl std::fmt::Display for OutputDestination {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Path(p) => write!(fmt, "{}", p.display()),
            Self::Stdout => write!(fmt, "standard output"),
        }
    }
}

/// Render `annotations` as `module.exports = {...};` with two space
/// indentation.
pub fn render(annotations: &AnnotationMap) -> Result<String> {
    let json = serde_json::to_string_pretty(annotations)?;
    Ok(format!("{EXPORT_PREFIX}{json}{EXPORT_SUFFIX}"))
}

/// Replace `path` with `bytes` via a temporary file in the same directory, so
/// that `path` either keeps its previous contents or holds all of `bytes`.
pub fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let file_name = path.file_name().ok_or_else(|| {
        Error::new(format!("{} is not a valid file path", path.display())).set_kind(ErrorKind::Io)
    })?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let tmp_path = dir.join(format!(
        ".{}.{}.tmp",
        file_name.to_string_lossy(),
        std::process::id()
    ));

    let write_tmp = || -> Result<()> {
        let mut file = File::create(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        std::fs::rename(&tmp_path, path)?;
        Ok(())
    };
    if let Err(err) = write_tmp() {
        _ = std::fs::remove_file(&tmp_path);
        return Err(err.set_summary(format!("Could not write {}", path.display())));
    }
    Ok(())
}

pub fn emit(annotations: &AnnotationMap, dest: &OutputDestination) -> Result<()> {
    let text = render(annotations)?;
    match dest {
        OutputDestination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|()| stdout.flush())
                .chain_err_summary(|| "Could not write to standard output")?;
        }
        OutputDestination::Path(path) => write_atomically(path, text.as_bytes())?,
    }
    log::info!(
        "Wrote {} annotations ({}) to {}",
        annotations.len(),
        BytesDisplay(text.len()),
        dest
    );
    Ok(())
}
