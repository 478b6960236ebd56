//! Camera test fixtures indexed by `fixtures/manifest.json`.
//!
//! The manifest maps each [`FixtureKind`] to `name -> relative path`.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixtureKind {
    /// `{ "objects": [...] }` scene descriptions.
    Scene,
    /// Bare keypoint arrays.
    Keypoints,
    /// Request payloads as a host sends them.
    Request,
}

impl fmt::Display for FixtureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FixtureKind::Scene => "scene",
            FixtureKind::Keypoints => "keypoints",
            FixtureKind::Request => "request",
        })
    }
}

type Manifest = HashMap<FixtureKind, BTreeMap<String, String>>;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

/// Absolute path of a named fixture.
pub fn path(kind: FixtureKind, name: &str) -> Result<PathBuf> {
    let rel = MANIFEST
        .get(&kind)
        .and_then(|entries| entries.get(name))
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))?;
    Ok(fixtures_root().join(rel))
}

/// Fixture names of one kind, sorted.
pub fn names(kind: FixtureKind) -> Vec<String> {
    MANIFEST
        .get(&kind)
        .map(|entries| entries.keys().cloned().collect())
        .unwrap_or_default()
}

/// Read and deserialize a named fixture.
pub fn load<T: DeserializeOwned>(kind: FixtureKind, name: &str) -> Result<T> {
    let file = path(kind, name)?;
    let text = fs::read_to_string(&file)
        .with_context(|| format!("failed to read {kind} fixture at {}", file.display()))?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse {kind} fixture '{name}'"))
}
