//
// emojigen - args module
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

//! Command line arguments.

use std::path::PathBuf;

use emojilib::error::Result;
use structopt::StructOpt;

use crate::subcommands;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "emojigen",
    about = "generate an emoji annotation to Unicode codepoint table"
)]
pub struct Opt {
    /// use specified configuration file
    #[structopt(short, long, value_name = "CONFIG_PATH", parse(from_os_str))]
    pub config: Option<PathBuf>,

    /// write the table to this path instead of the configured one. Path `-`
    /// will output to standard output instead.
    #[structopt(short, long, value_name = "OUTPUT_PATH", parse(from_os_str))]
    pub output: Option<PathBuf>,

    /// increase log verbosity; may be repeated.
    #[structopt(short, long, parse(from_occurrences))]
    pub verbose: u8,

    #[structopt(subcommand)]
    pub subcommand: Option<SubCommand>,
}

#[derive(Debug, StructOpt)]
pub enum SubCommand {
    /// print default configuration in full to stdout and exit.
    #[structopt(display_order = 1)]
    PrintDefaultConfig,
    /// test a configuration file for syntax issues or unknown options.
    #[structopt(display_order = 2)]
    TestConfig {
        #[structopt(value_name = "CONFIG_PATH", parse(from_os_str))]
        path: PathBuf,
    },
}

impl SubCommand {
    pub fn execute(self) -> Result<()> {
        match self {
            Self::PrintDefaultConfig => subcommands::print_default_config(),
            Self::TestConfig { path } => subcommands::test_config(&path),
        }
    }
}
