//! package.json inspection for the readiness checklist

use crate::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

/// The subset of package.json the checklist looks at.
///
/// `bin` stays a raw JSON value: npm allows both the string and the map form,
/// and the checklist only asks whether a named entry exists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub bin: Value,
    #[serde(default)]
    pub files: Vec<String>,
}

impl PackageManifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let manifest = serde_json::from_str(&content)
            .with_context(|| format!("{} is not valid JSON", path.display()))?;
        Ok(manifest)
    }

    pub fn name_is(&self, expected: &str) -> bool {
        self.name == expected
    }

    /// Version starts with `major.minor.patch`; pre-release suffixes are fine
    pub fn version_is_semver(&self) -> bool {
        Regex::new(r"^\d+\.\d+\.\d+")
            .map(|re| re.is_match(&self.version))
            .unwrap_or(false)
    }

    pub fn has_bin(&self, name: &str) -> bool {
        self.bin.get(name).map_or(false, |v| !v.is_null())
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

/// One structural predicate over the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestCheck {
    /// The manifest parses at all
    Parses,
    NameEquals(String),
    VersionSemver,
    BinEntry(String),
    FilesListed,
}

impl ManifestCheck {
    pub fn holds(&self, manifest: &PackageManifest) -> bool {
        match self {
            ManifestCheck::Parses => true,
            ManifestCheck::NameEquals(expected) => manifest.name_is(expected),
            ManifestCheck::VersionSemver => manifest.version_is_semver(),
            ManifestCheck::BinEntry(name) => manifest.has_bin(name),
            ManifestCheck::FilesListed => manifest.has_files(),
        }
    }

    pub fn failure_reason(&self) -> String {
        match self {
            ManifestCheck::Parses => "package.json could not be parsed".to_string(),
            ManifestCheck::NameEquals(expected) => {
                format!("package name does not match '{}'", expected)
            }
            ManifestCheck::VersionSemver => "version is not a semver string".to_string(),
            ManifestCheck::BinEntry(name) => format!("bin entry '{}' is missing", name),
            ManifestCheck::FilesListed => "files list is missing or empty".to_string(),
        }
    }
}
