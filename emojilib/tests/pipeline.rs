//
// emojilib - pipeline tests
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

use std::{
    collections::HashMap,
    io::Write,
    sync::Mutex,
};

use emojilib::{
    emit::OutputDestination,
    error::{Error, ErrorKind, NetworkErrorKind},
    fetch::{Fetch, ResultFuture},
    run_with, GeneratorConf, ReconcileStats,
};
use flate2::{write::GzEncoder, Compression};
use tempfile::TempDir;

const VENDOR_URL: &str = "https://api.github.test/emojis";
const REGISTRY_URL: &str = "https://registry.npmjs.test/";
const METADATA_URL: &str = "https://registry.npmjs.test/unicode-emoji";
const TARBALL_URL: &str = "https://registry.npmjs.test/unicode-emoji/-/unicode-emoji-4.0.4.tgz";

const VENDOR_JSON: &str = r#"{
  "+1": "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8",
  "thumbsup": "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8",
  "heart": "https://github.githubassets.com/images/icons/emoji/unicode/2764.png?v8",
  "hash": "https://github.githubassets.com/images/icons/emoji/unicode/0023-20e3.png?v8",
  "man_technologist": "https://github.githubassets.com/images/icons/emoji/unicode/1f468-1f4bb.png?v8",
  "octocat": "https://github.githubassets.com/images/icons/emoji/octocat.png?v8"
}"#;

const EXPECTED: &str = r#"module.exports = {
  "+1": "1f44d",
  "hash": "23-fe0f-20e3",
  "heart": "2764-fe0f",
  "man_technologist": "1f468-200d-1f4bb",
  "person_running_facing_right": "1f3c3-200d-27a1-fe0f",
  "person_running_facing_right_light_skin_tone": "1f3c3-1f3fb-200d-27a1-fe0f",
  "thumbs_up_light_skin_tone": "1f44d-1f3fb",
  "thumbsup": "1f44d",
  "unicorn": "1f984"
};
"#;

/// Serves fixed bodies and records every requested URL.
#[derive(Debug, Default)]
struct FakeFetcher {
    bodies: HashMap<String, Vec<u8>>,
    requests: Mutex<Vec<String>>,
}

impl FakeFetcher {
    fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.bodies.insert(url.to_string(), body.into());
        self
    }
}

impl Fetch for FakeFetcher {
    fn get(&self, url: &str) -> ResultFuture<'_, Vec<u8>> {
        self.requests.lock().unwrap().push(url.to_string());
        let res = self.bodies.get(url).cloned().ok_or_else(|| {
            Error::new(format!("Request to {url} failed with status 404 Not Found"))
                .set_kind(ErrorKind::Network(NetworkErrorKind::NotFound))
        });
        Box::pin(async move { res })
    }
}

fn package_source() -> String {
    let data = serde_json::json!({
        "emojis": [
            {
                "emoji": "\u{1f44d}",
                "description": "thumbs up",
                "category": "People & Body",
                "variations": [
                    { "emoji": "\u{1f44d}\u{1f3fb}", "description": "thumbs up: light skin tone" }
                ]
            },
            { "emoji": "\u{2764}\u{fe0f}", "description": "red heart" },
            { "emoji": "#\u{fe0f}\u{20e3}", "description": "keycap: #" },
            { "emoji": "\u{1f468}\u{200d}\u{1f4bb}", "description": "man technologist" },
            {
                "emoji": "\u{1f3c3}\u{200d}\u{27a1}\u{fe0f}",
                "description": "person running facing right",
                "variations": [
                    {
                        "emoji": "\u{1f3c3}\u{1f3fb}\u{200d}\u{27a1}\u{fe0f}",
                        "description": "person running facing right"
                    }
                ]
            },
            { "emoji": "\u{1f984}", "description": "unicorn", "variations": [] }
        ]
    });
    format!("export default {};\n", serde_json::to_string(&data).unwrap())
}

fn tarball(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (path, data) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_size(data.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, path, *data).unwrap();
    }
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&builder.into_inner().unwrap()).unwrap();
    encoder.finish().unwrap()
}

fn metadata() -> String {
    format!(
        r#"{{"name":"unicode-emoji","dist-tags":{{"latest":"4.0.4"}},"versions":{{"4.0.3":{{"dist":{{"tarball":"https://registry.npmjs.test/unicode-emoji/-/unicode-emoji-4.0.3.tgz"}}}},"4.0.4":{{"dist":{{"tarball":"{TARBALL_URL}"}}}}}}}}"#
    )
}

fn conf(output: &std::path::Path) -> GeneratorConf {
    GeneratorConf {
        vendor_url: VENDOR_URL.to_string(),
        registry_url: REGISTRY_URL.to_string(),
        output: output.to_path_buf(),
        ..GeneratorConf::default()
    }
}

fn fetcher(vendor_json: &str, members: &[(&str, &[u8])]) -> FakeFetcher {
    FakeFetcher::default()
        .with(VENDOR_URL, vendor_json)
        .with(METADATA_URL, metadata())
        .with(TARBALL_URL, tarball(members))
}

#[test]
fn test_pipeline_generates_annotation_table() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("emoji-annotation-to-unicode.js");
    let source = package_source();
    let fetch = fetcher(
        VENDOR_JSON,
        &[
            ("package/package.json", b"{\"name\":\"unicode-emoji\"}"),
            ("package/unicode-emoji.js", source.as_bytes()),
        ],
    );

    let conf = conf(&output);
    let stats = run_with(&conf, &fetch, &OutputDestination::Path(output.clone())).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), EXPECTED);
    assert_eq!(
        stats,
        ReconcileStats {
            vendor_entries: 5,
            unicode_entries: 8,
            claimed: 4,
            unicode_only: 4,
            name_collisions: 0,
        }
    );

    let mut requests = fetch.requests.lock().unwrap().clone();
    requests.sort();
    assert_eq!(requests, vec![VENDOR_URL, METADATA_URL, TARBALL_URL]);

    // Running again over the same inputs gives the same file.
    run_with(&conf, &fetch, &OutputDestination::Path(output.clone())).unwrap();
    assert_eq!(std::fs::read_to_string(&output).unwrap(), EXPECTED);
}

#[test]
fn test_pipeline_missing_member() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("out.js");
    let fetch = fetcher(VENDOR_JSON, &[("package/index.js", b"export default {};")]);

    let err = run_with(
        &conf(&output),
        &fetch,
        &OutputDestination::Path(output.clone()),
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::MemberNotFound);
    assert!(err.details.contains("package/unicode-emoji.js"), "{err}");
    assert!(!output.exists());
}

#[test]
fn test_pipeline_unmatched_vendor_entry() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("out.js");
    std::fs::write(&output, "module.exports = {};\n").unwrap();
    let source = package_source();
    let vendor_json = r#"{
  "+1": "https://github.githubassets.com/images/icons/emoji/unicode/1f44d.png?v8",
  "shipit": "https://github.githubassets.com/images/icons/emoji/unicode/1f43f.png?v8"
}"#;
    let fetch = fetcher(vendor_json, &[("package/unicode-emoji.js", source.as_bytes())]);

    let err = run_with(
        &conf(&output),
        &fetch,
        &OutputDestination::Path(output.clone()),
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnmatchedVendorEntry);
    assert!(err.details.contains("shipit"), "{err}");
    // Previous output is untouched.
    assert_eq!(
        std::fs::read_to_string(&output).unwrap(),
        "module.exports = {};\n"
    );
}

#[test]
fn test_pipeline_network_failure() {
    let tmp_dir = TempDir::new().unwrap();
    let output = tmp_dir.path().join("out.js");
    let fetch = FakeFetcher::default().with(VENDOR_URL, VENDOR_JSON);

    let err = run_with(
        &conf(&output),
        &fetch,
        &OutputDestination::Path(output.clone()),
    )
    .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Network(NetworkErrorKind::NotFound));
    assert!(!output.exists());
}
