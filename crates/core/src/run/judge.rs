//! Pass/fail evaluation of a finished case.

use serde::Serialize;

use crate::level::TestCase;
use crate::tape::Tape;

/// How a finished case compares to its expectation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Verdict {
    /// The interpreter's verdict equals the expected one.
    pub accept_matches: bool,
    /// The final tape equals the expected output, or no output is expected.
    pub output_matches: bool,
    /// Both of the above.
    pub passed: bool,
}

/// Judges a terminated run of `test`.
///
/// An empty expected output only checks the verdict. Otherwise the unread
/// contents of `tape` must equal the expected output symbol for symbol;
/// how far the head has travelled does not matter.
pub fn judge(test: &TestCase, accept: bool, tape: &Tape) -> Verdict {
    let accept_matches = accept == test.accept;
    let output_matches = test.output.is_empty() || *tape == test.output;
    Verdict {
        accept_matches,
        output_matches,
        passed: accept_matches && output_matches,
    }
}

/// The record kept for every judged case.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestOutcome {
    /// Position of the case in the level's list.
    pub index: usize,
    /// The judgement.
    pub verdict: Verdict,
    /// The interpreter's verdict; `false` after a fault.
    pub accept: bool,
    /// Steps the interpreter took.
    pub steps: u32,
    /// Fault message, when the interpreter failed instead of halting.
    pub fault: Option<String>,
    /// Unread contents of the final tape.
    pub tape: String,
}

impl TestOutcome {
    /// Shorthand for `verdict.passed`.
    pub const fn passed(&self) -> bool {
        self.verdict.passed
    }
}
