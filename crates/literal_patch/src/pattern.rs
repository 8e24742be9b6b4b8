// crates/literal_patch/src/pattern.rs

use crate::error::PatchError;

/// A `(bad, good)` pair of text literals. `bad` is never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PatternPair<'a> {
    bad: &'a str,
    good: &'a str,
}

impl<'a> PatternPair<'a> {
    /// Builds a pair at runtime, rejecting an empty `bad` literal.
    pub fn new(bad: &'a str, good: &'a str) -> Result<Self, PatchError> {
        if bad.is_empty() {
            return Err(PatchError::EmptyPattern);
        }
        Ok(Self { bad, good })
    }

    /// Builds a pair in a `const` context. An empty `bad` literal fails
    /// constant evaluation.
    pub const fn literal(bad: &'a str, good: &'a str) -> Self {
        assert!(!bad.is_empty(), "the pattern to replace must not be empty");
        Self { bad, good }
    }

    pub fn bad(&self) -> &'a str {
        self.bad
    }

    pub fn good(&self) -> &'a str {
        self.good
    }

    /// The same pair as UTF-8 bytes, for use against a `ByteArtifact`.
    pub const fn as_bytes(&self) -> BytePatternPair<'a> {
        BytePatternPair {
            bad: self.bad.as_bytes(),
            good: self.good.as_bytes(),
        }
    }
}

/// A `(bad, good)` pair of raw byte literals. `bad` is never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BytePatternPair<'a> {
    bad: &'a [u8],
    good: &'a [u8],
}

impl<'a> BytePatternPair<'a> {
    pub fn new(bad: &'a [u8], good: &'a [u8]) -> Result<Self, PatchError> {
        if bad.is_empty() {
            return Err(PatchError::EmptyPattern);
        }
        Ok(Self { bad, good })
    }

    pub const fn literal(bad: &'a [u8], good: &'a [u8]) -> Self {
        assert!(!bad.is_empty(), "the pattern to replace must not be empty");
        Self { bad, good }
    }

    pub fn bad(&self) -> &'a [u8] {
        self.bad
    }

    pub fn good(&self) -> &'a [u8] {
        self.good
    }
}
