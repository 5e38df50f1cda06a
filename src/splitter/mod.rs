mod classify;
mod reader;

use reader::Reader;

/// Split a "CamelCase" string into its constituent words.
///
/// The concatenation of the returned tokens always reconstructs `input`
/// exactly. An empty input yields a single empty token.
pub fn split(input: &str) -> Vec<&str> {
    split_with(input, &[])
}

/// Like [`split`], but any word in `no_split` is never fragmented, even if
/// its internal casing or digits would normally introduce a boundary.
///
/// The check is prefix-based: while the token accumulated so far is a prefix
/// of some `no_split` entry, the scan keeps going past what would otherwise
/// be a boundary. An entry that is a strict prefix of the input but never
/// completes can therefore pull extra characters into a token.
pub fn split_with<'a>(input: &'a str, no_split: &[&str]) -> Vec<&'a str> {
    if input.is_empty() {
        return vec![input];
    }

    let mut rdr = Reader::new(input);
    let mut parts = Vec::new();

    while !rdr.at_end() {
        parts.push(rdr.read_token(no_split));
    }

    parts
}

/// Byte-level entry point. Input that is not valid UTF-8 is passed through
/// unchanged as a single element instead of failing, so the function is
/// total over arbitrary byte strings.
pub fn split_bytes(input: &[u8]) -> Vec<&[u8]> {
    match std::str::from_utf8(input) {
        Ok(s) => split(s).into_iter().map(str::as_bytes).collect(),
        Err(_) => vec![input],
    }
}
