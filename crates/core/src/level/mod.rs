//! Levels and their shareable string encodings.
//!
//! A [`Level`] bundles a title, a program and the test cases that judge it.
//! Levels travel as a single string, usually in the fragment of a share link.
//! Two encodings exist:
//! 1. **JSON-hash:** The current format; see [`json`].
//! 2. **Legacy:** Strings starting with `lvl`; see [`legacy`]. These carry a
//!    program only.
//!
//! The prefix alone decides the decoder: a `lvl` string that fails the legacy
//! grammar is an error, never a second attempt as JSON.

/// Percent-escaping compatible with `encodeURI` / `decodeURI`.
pub mod escape;
/// The JSON-hash level format.
pub mod json;
/// The `lvl` positional program format.
pub mod legacy;

use tracing::debug;

use crate::common::DecodeError;
use crate::program::Program;
use crate::tape::Tape;

/// Prefix that routes a level string to the legacy decoder.
pub const LEGACY_PREFIX: &str = "lvl";

/// One judged scenario: run on `input`, expect `accept`, and when `output`
/// is non-empty expect the final tape to equal it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestCase {
    /// Expected verdict.
    pub accept: bool,
    /// Template input tape; each run works on a clone.
    pub input: Tape,
    /// Expected final tape; empty means the tape is not checked.
    pub output: Tape,
    /// Step ceiling handed to the interpreter; `0` means unlimited.
    pub limit: u32,
}

impl TestCase {
    /// The case synthesised for levels that define none: accept an empty
    /// tape, check nothing else, no step limit.
    pub const fn default_case() -> Self {
        Self {
            accept: true,
            input: Tape::new(),
            output: Tape::new(),
            limit: 0,
        }
    }
}

/// A named program with its test cases.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Level {
    /// Display title.
    pub title: String,
    /// Cases run in order by the controller.
    pub test_cases: Vec<TestCase>,
    /// The program under test.
    pub program: Program,
}

/// The result of decoding a level string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decoded {
    /// A full level from the JSON-hash format.
    Level(Level),
    /// A bare program from the legacy format.
    Program(Program),
}

impl Decoded {
    /// The decoded program, whichever format it came from.
    pub const fn program(&self) -> &Program {
        match self {
            Self::Level(level) => &level.program,
            Self::Program(program) => program,
        }
    }
}

/// Decodes a level string, choosing the format by prefix.
///
/// # Errors
///
/// Returns a [`DecodeError`] if the string is empty or fails the chosen format.
pub fn decode(text: &str) -> Result<Decoded, DecodeError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(DecodeError::Empty);
    }
    if text.starts_with(LEGACY_PREFIX) {
        debug!(len = text.len(), "decoding legacy level string");
        legacy::decode(text).map(Decoded::Program)
    } else {
        debug!(len = text.len(), "decoding JSON level string");
        json::decode(text).map(Decoded::Level)
    }
}

/// Encodes a level in the JSON-hash format (unescaped).
pub fn encode(level: &Level) -> String {
    json::encode(level)
}

/// Builds a share link: `base_url`, `#`, then the escaped JSON-hash encoding.
pub fn share_link(base_url: &str, level: &Level) -> String {
    let base = base_url.split('#').next().unwrap_or_default();
    format!("{base}#{}", escape::encode_uri(&encode(level)))
}

/// Extracts the level string from user input.
///
/// Accepts a bare level string, a `#fragment`, or a complete share link.
/// Bare JSON is returned trimmed and otherwise untouched. Anything else with
/// a `#` is a link whatever its base, and its fragment is percent-decoded.
/// Legacy strings never contain `#`, so only a `#`-less input is taken as a
/// bare `lvl` string.
///
/// # Errors
///
/// Returns [`DecodeError::Escape`] if a percent-escape decodes to invalid UTF-8.
pub fn unwrap_link(input: &str) -> Result<String, DecodeError> {
    let input = input.trim();
    if input.starts_with('{') {
        return Ok(input.to_string());
    }
    match input.split_once('#') {
        Some((_, fragment)) => Ok(escape::decode_uri(fragment)?.trim().to_string()),
        None if input.starts_with(LEGACY_PREFIX) => Ok(input.to_string()),
        None => Ok(escape::decode_uri(input)?.trim().to_string()),
    }
}
