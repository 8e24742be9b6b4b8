// crates/literal_patch/src/replace.rs

use memchr::memmem;

use crate::pattern::{BytePatternPair, PatternPair};

/// Replaces every non-overlapping occurrence of `pair.bad()` in `content`,
/// scanning left to right.
///
/// Matching is exact: no pattern syntax, no escapes, no whitespace folding.
/// Returns the new content along with the number of occurrences replaced.
pub fn replace_literal(content: &str, pair: &PatternPair<'_>) -> (String, usize) {
    let count = content.matches(pair.bad()).count();
    if count == 0 {
        return (content.to_owned(), 0);
    }
    (content.replace(pair.bad(), pair.good()), count)
}

/// Byte-level counterpart of [`replace_literal`].
///
/// On UTF-8 input with a pair produced by `PatternPair::as_bytes`, this gives
/// exactly the bytes of the text-mode result.
pub fn replace_literal_bytes(content: &[u8], pair: &BytePatternPair<'_>) -> (Vec<u8>, usize) {
    let bad = pair.bad();
    let finder = memmem::Finder::new(bad);

    let mut output = Vec::with_capacity(content.len());
    let mut copied_up_to = 0;
    let mut count = 0;
    for start in finder.find_iter(content) {
        output.extend_from_slice(&content[copied_up_to..start]);
        output.extend_from_slice(pair.good());
        copied_up_to = start + bad.len();
        count += 1;
    }
    output.extend_from_slice(&content[copied_up_to..]);

    (output, count)
}
