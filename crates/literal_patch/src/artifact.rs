// crates/literal_patch/src/artifact.rs

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::error::PatchError;
use crate::pattern::{BytePatternPair, PatternPair};
use crate::replace::{replace_literal, replace_literal_bytes};

/// A file loaded fully into memory, patched in place, then written back whole.
pub trait Artifact: Sized {
    /// The pattern type this artifact can be patched with.
    type Pattern<'p>;

    /// Reads the entire file at `path`.
    fn load(path: &Path) -> Result<Self, PatchError>;

    fn path(&self) -> &Path;

    /// Size of the in-memory content, in bytes.
    fn byte_len(&self) -> usize;

    /// Replaces every occurrence of the pattern in memory and returns how many
    /// were replaced. Nothing touches the disk until `persist`.
    fn apply(&mut self, pair: &Self::Pattern<'_>) -> usize;

    /// Overwrites the file at `path()` with the current content.
    fn persist(&self) -> Result<(), PatchError>;
}

/// Validated UTF-8 content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextArtifact {
    path: PathBuf,
    content: String,
}

impl TextArtifact {
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Artifact for TextArtifact {
    type Pattern<'p> = PatternPair<'p>;

    fn load(path: &Path) -> Result<Self, PatchError> {
        let bytes = read_all(path)?;
        let content = String::from_utf8(bytes).map_err(|source| PatchError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn byte_len(&self) -> usize {
        self.content.len()
    }

    fn apply(&mut self, pair: &Self::Pattern<'_>) -> usize {
        let (patched, count) = replace_literal(&self.content, pair);
        self.content = patched;
        count
    }

    fn persist(&self) -> Result<(), PatchError> {
        write_all(&self.path, self.content.as_bytes())
    }
}

/// Opaque byte content; never decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteArtifact {
    path: PathBuf,
    content: Vec<u8>,
}

impl ByteArtifact {
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

impl Artifact for ByteArtifact {
    type Pattern<'p> = BytePatternPair<'p>;

    fn load(path: &Path) -> Result<Self, PatchError> {
        Ok(Self {
            path: path.to_path_buf(),
            content: read_all(path)?,
        })
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn byte_len(&self) -> usize {
        self.content.len()
    }

    fn apply(&mut self, pair: &Self::Pattern<'_>) -> usize {
        let (patched, count) = replace_literal_bytes(&self.content, pair);
        self.content = patched;
        count
    }

    fn persist(&self) -> Result<(), PatchError> {
        write_all(&self.path, &self.content)
    }
}

/// Outcome of a single patch run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub replaced: usize,
}

impl PatchReport {
    /// True when the bad pattern was absent and the file was rewritten unchanged.
    pub fn is_noop(&self) -> bool {
        self.replaced == 0
    }
}

/// Loads the artifact at `path`, applies `pair`, and overwrites the file.
///
/// The file is always rewritten, even when nothing matched. If loading fails
/// (missing file, invalid UTF-8 in text mode) the file is left untouched.
pub fn patch_file<A: Artifact>(path: &Path, pair: &A::Pattern<'_>) -> Result<PatchReport, PatchError> {
    let mut artifact = A::load(path)?;
    debug!("loaded {} bytes from {}", artifact.byte_len(), artifact.path().display());

    let replaced = artifact.apply(pair);
    debug!("replaced {} occurrence(s) in memory", replaced);
    if replaced == 0 {
        warn!("pattern not found in {}; rewriting unchanged", artifact.path().display());
    }

    artifact.persist()?;
    debug!("wrote {} bytes to {}", artifact.byte_len(), artifact.path().display());
    info!("patched {}: {} occurrence(s)", artifact.path().display(), replaced);

    Ok(PatchReport {
        path: artifact.path().to_path_buf(),
        replaced,
    })
}

pub fn patch_text_file(path: &Path, pair: &PatternPair<'_>) -> Result<PatchReport, PatchError> {
    patch_file::<TextArtifact>(path, pair)
}

pub fn patch_byte_file(path: &Path, pair: &BytePatternPair<'_>) -> Result<PatchReport, PatchError> {
    patch_file::<ByteArtifact>(path, pair)
}

fn read_all(path: &Path) -> Result<Vec<u8>, PatchError> {
    fs::read(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn write_all(path: &Path, content: &[u8]) -> Result<(), PatchError> {
    fs::write(path, content).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })
}
