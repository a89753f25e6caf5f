//! Run statistics collection and reporting.
//!
//! This module tracks what the controller did across runs. It provides:
//! 1. **Steps:** Interpreter transitions and animated token moves.
//! 2. **Cases:** Cases started, passed and failed, plus interpreter faults.
//! 3. **Report:** A fixed-width text summary in the same banner layout for
//!    every front end.

use std::fmt::Write as _;
use std::time::Instant;

const HEAVY_RULE: &str = "==========================================================";
const LIGHT_RULE: &str = "----------------------------------------------------------";

/// Counters gathered by the controller.
#[derive(Clone, Debug)]
pub struct RunStats {
    start_time: Instant,
    /// Interpreter steps issued.
    pub steps: u64,
    /// Token transitions handed to the bridge.
    pub animations: u64,
    /// Test cases started, including re-runs after a stop.
    pub cases_started: u64,
    /// Test cases judged as passed.
    pub cases_passed: u64,
    /// Test cases judged as failed.
    pub cases_failed: u64,
    /// Interpreter faults, at start or on a step.
    pub faults: u64,
}

impl Default for RunStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            animations: 0,
            cases_started: 0,
            cases_passed: 0,
            cases_failed: 0,
            faults: 0,
        }
    }
}

impl RunStats {
    /// Cases that reached a verdict.
    pub const fn cases_judged(&self) -> u64 {
        self.cases_passed + self.cases_failed
    }

    /// Share of judged cases that passed, in percent; `0.0` before any verdict.
    pub fn pass_rate(&self) -> f64 {
        let judged = self.cases_judged();
        if judged == 0 {
            0.0
        } else {
            100.0 * self.cases_passed as f64 / judged as f64
        }
    }

    /// Average steps per judged case; `0.0` before any verdict.
    pub fn steps_per_case(&self) -> f64 {
        let judged = self.cases_judged();
        if judged == 0 {
            0.0
        } else {
            self.steps as f64 / judged as f64
        }
    }

    /// Formats the report.
    pub fn render(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let mut out = String::new();
        let _ = writeln!(out, "{HEAVY_RULE}");
        let _ = writeln!(out, "TAPEWORKS RUN STATISTICS");
        let _ = writeln!(out, "{HEAVY_RULE}");
        let _ = writeln!(out, "host_seconds             {seconds:.4} s");
        let _ = writeln!(out, "steps                    {}", self.steps);
        let _ = writeln!(out, "animations               {}", self.animations);
        let _ = writeln!(out, "faults                   {}", self.faults);
        let _ = writeln!(out, "{LIGHT_RULE}");
        let _ = writeln!(out, "CASES");
        let _ = writeln!(out, "  cases.started          {}", self.cases_started);
        let _ = writeln!(out, "  cases.passed           {}", self.cases_passed);
        let _ = writeln!(out, "  cases.failed           {}", self.cases_failed);
        let _ = writeln!(out, "  cases.pass_rate        {:.2}%", self.pass_rate());
        let _ = writeln!(out, "  cases.steps_avg        {:.2}", self.steps_per_case());
        let _ = writeln!(out, "{HEAVY_RULE}");
        out
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("\n{}", self.render());
    }
}
