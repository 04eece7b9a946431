//
// emojilib - generate module
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

//! The whole generator: load both sources concurrently, reconcile, write.

use crate::{
    conf::GeneratorConf,
    emit::{emit, OutputDestination},
    error::Result,
    fetch::{Fetch, HttpFetcher, NpmRegistry},
    reconcile::{reconcile, ReconcileStats, Reconciled},
    unicode::get_unicode_data,
    vendor::get_vendor_data,
};

/// Load the GitHub and Unicode maps through `fetch` and reconcile them. The
/// first failure of either loader aborts the other.
pub async fn generate(conf: &GeneratorConf, fetch: &dyn Fetch) -> Result<Reconciled> {
    let registry = NpmRegistry::new(fetch, &conf.registry_url);
    let (vendor, unicode) = futures::try_join!(
        get_vendor_data(fetch, &conf.vendor_url),
        get_unicode_data(&registry, &conf.package_name, &conf.package_member),
    )?;
    let reconciled = reconcile(&vendor, &unicode)?;
    log::info!("Reconciled: {}", reconciled.stats);
    Ok(reconciled)
}

/// Generate with `fetch` and write the result to `dest`.
pub fn run_with(
    conf: &GeneratorConf,
    fetch: &dyn Fetch,
    dest: &OutputDestination,
) -> Result<ReconcileStats> {
    let Reconciled { annotations, stats } = futures::executor::block_on(generate(conf, fetch))?;
    emit(&annotations, dest)?;
    Ok(stats)
}

/// Generate over HTTP and write the result to `dest`.
pub fn run(conf: &GeneratorConf, dest: &OutputDestination) -> Result<ReconcileStats> {
    let fetcher = HttpFetcher::new(&conf.user_agent)?;
    run_with(conf, &fetcher, dest)
}
