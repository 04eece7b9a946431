//
// emojilib - configuration module
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

//! Generator configuration.
//!
//! Every setting has a default, so an empty file (or no file at all) is a
//! valid configuration:
//!
//! ```toml
//! vendor_url = "https://api.github.com/emojis"
//! registry_url = "https://registry.npmjs.org"
//! package_name = "unicode-emoji"
//! package_member = "package/unicode-emoji.js"
//! output = "emoji-annotation-to-unicode.js"
//! user_agent = "emojimap"
//! log_level = "INFO"
//! ```

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use crate::{
    error::{Error, ErrorKind, Result, ResultIntoError},
    utils::logging::LogLevel,
};

pub const VENDOR_URL: &str = "https://api.github.com/emojis";
pub const REGISTRY_URL: &str = "https://registry.npmjs.org";
pub const PACKAGE_NAME: &str = "unicode-emoji";
pub const PACKAGE_MEMBER: &str = "package/unicode-emoji.js";
pub const OUTPUT: &str = "emoji-annotation-to-unicode.js";
pub const USER_AGENT: &str = "emojimap";

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConf {
    /// GitHub emoji API endpoint.
    pub vendor_url: String,
    /// npm registry base URL.
    pub registry_url: String,
    pub package_name: String,
    /// Path of the data module inside the package tarball.
    pub package_member: String,
    /// Output file, or `-` for standard output.
    pub output: PathBuf,
    /// Sent with every request; the GitHub API refuses requests without one.
    pub user_agent: String,
    pub log_level: LogLevel,
}

impl Default for GeneratorConf {
    fn default() -> Self {
        Self {
            vendor_url: VENDOR_URL.to_string(),
            registry_url: REGISTRY_URL.to_string(),
            package_name: PACKAGE_NAME.to_string(),
            package_member: PACKAGE_MEMBER.to_string(),
            output: PathBuf::from(OUTPUT),
            user_agent: USER_AGENT.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

impl GeneratorConf {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let _: toml::Table = toml::from_str(s).map_err(|err| {
            Error::new(format!("Config file is invalid TOML; {}", err))
                .set_kind(ErrorKind::Configuration)
        })?;
        toml::from_str(s).map_err(|err| {
            Error::new(err.to_string())
                .set_summary("Config file contains errors")
                .set_source(Some(Arc::new(err)))
                .set_kind(ErrorKind::Configuration)
        })
    }

    /// Read and validate the file at `path`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .chain_err_summary(|| format!("Could not read config file {}", path.display()))?;
        Self::from_toml_str(&s).chain_err_summary(|| format!("{}", path.display()))
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conf_defaults() {
        let conf = GeneratorConf::from_toml_str("").unwrap();
        assert_eq!(conf, GeneratorConf::default());
        assert_eq!(conf.output, PathBuf::from("emoji-annotation-to-unicode.js"));
        assert_eq!(conf.log_level, LogLevel::INFO);
    }

    #[test]
    fn test_conf_partial() {
        let conf = GeneratorConf::from_toml_str(
            r#"
output = "-"
registry_url = "http://localhost:4873"
log_level = "TRACE"
"#,
        )
        .unwrap();
        assert_eq!(conf.output, PathBuf::from("-"));
        assert_eq!(conf.registry_url, "http://localhost:4873");
        assert_eq!(conf.log_level, LogLevel::TRACE);
        assert_eq!(conf.vendor_url, VENDOR_URL);
    }

    #[test]
    fn test_conf_errors() {
        let err = GeneratorConf::from_toml_str("vendor_url = ").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.details.contains("invalid TOML"), "{}", err.details);

        let err = GeneratorConf::from_toml_str("output_dir = \"/tmp\"").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
        assert!(err.details.contains("output_dir"), "{}", err.details);

        let err = GeneratorConf::from_toml_str("log_level = \"LOUD\"").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn test_conf_default_config_round_trips() {
        let s = GeneratorConf::default().to_toml_string().unwrap();
        assert!(s.contains("vendor_url = \"https://api.github.com/emojis\""), "{s}");
        assert_eq!(
            GeneratorConf::from_toml_str(&s).unwrap(),
            GeneratorConf::default()
        );
    }

    #[test]
    fn test_conf_from_path() {
        let tmp_dir = tempfile::TempDir::new().unwrap();
        let path = tmp_dir.path().join("emojigen.toml");
        std::fs::write(&path, "package_name = \"unicode-emoji-json\"\n").unwrap();
        assert_eq!(
            GeneratorConf::from_path(&path).unwrap().package_name,
            "unicode-emoji-json"
        );

        let err = GeneratorConf::from_path(&tmp_dir.path().join("missing.toml")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Io);
    }
}
