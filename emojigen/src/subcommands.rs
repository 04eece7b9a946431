//
// emojigen - subcommands module
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

//! Command line subcommands.

use std::{io::Write, path::Path};

use emojilib::{
    error::{Result, ResultIntoError},
    GeneratorConf,
};

pub fn print_default_config() -> Result<()> {
    let s = GeneratorConf::default().to_toml_string()?;
    std::io::stdout()
        .write_all(s.as_bytes())
        .chain_err_summary(|| "Could not write to standard output")?;
    Ok(())
}

pub fn test_config(path: &Path) -> Result<()> {
    GeneratorConf::from_path(path)?;
    println!("{}: OK", path.display());
    Ok(())
}
