// crates/literal_patch/src/lib.rs

//! Literal find-and-replace over whole files, in either validated-text or
//! raw-byte mode.
//!
//! Text mode (`TextArtifact`) requires the file to be valid UTF-8 and works
//! on `String` content. Byte mode (`ByteArtifact`) never decodes and works on
//! `Vec<u8>`, which makes it the fallback when a file carries byte sequences
//! that would not survive a UTF-8 round trip.

pub mod artifact;
pub mod error;
pub mod pattern;
pub mod replace;

pub use artifact::{
    patch_byte_file, patch_file, patch_text_file, Artifact, ByteArtifact, PatchReport, TextArtifact,
};
pub use error::PatchError;
pub use pattern::{BytePatternPair, PatternPair};
pub use replace::{replace_literal, replace_literal_bytes};
