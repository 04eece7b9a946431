//
// emojigen
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

//! Command line generator binary.
//!
//! Fetches the GitHub emoji list and the `unicode-emoji` npm package, and
//! writes `emoji-annotation-to-unicode.js`. All the work is done in the
//! `emojilib` crate.

use emojilib::{emit::OutputDestination, error::Result, GeneratorConf, StderrLogger};
use structopt::StructOpt;

mod args;
mod subcommands;

use args::*;

fn main() {
    let opt = Opt::from_args();
    ::std::process::exit(match run_app(opt) {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    });
}

fn run_app(mut opt: Opt) -> Result<()> {
    if let Some(subcommand) = opt.subcommand.take() {
        return subcommand.execute();
    }

    let conf = match opt.config.as_deref() {
        Some(path) => GeneratorConf::from_path(path)?,
        None => GeneratorConf::default(),
    };
    let logger = StderrLogger::new(conf.log_level.increase(opt.verbose));
    log::debug!("Log level is {}", logger.log_level());

    let dest = OutputDestination::from(
        opt.output
            .as_deref()
            .unwrap_or_else(|| conf.output.as_path()),
    );
    let stats = emojilib::run(&conf, &dest)?;
    log::info!("Done: {}", stats);
    Ok(())
}
