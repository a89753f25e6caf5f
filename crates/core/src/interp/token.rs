//! Token interpreter.
//!
//! One step moves the token exactly one cell. The exit heading is decided by
//! the cell the token is leaving:
//! 1. **Start cell:** The start endpoint's forward heading.
//! 2. **Conveyor:** The tile's forward heading.
//! 3. **Branch:** First colour under the head is consumed and exits clockwise,
//!    second colour is consumed and exits counter-clockwise (swapped when
//!    mirrored), anything else passes straight through unconsumed.
//! 4. **Writer:** Appends its colour, then exits forward.
//!
//! Entering the end cell accepts. Leaving the grid, entering an empty cell,
//! or exhausting the step limit rejects.

use tracing::trace;

use super::Interpreter;
use crate::common::{Direction, Position, StepFault};
use crate::program::Program;
use crate::tape::Tape;

/// Why the token stopped moving.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Halt {
    /// Reached the end cell.
    Accepted,
    /// Tried to leave the grid.
    OffGrid,
    /// Moved onto a cell with no tile.
    EmptyCell,
    /// Ran out of steps.
    LimitReached,
}

/// Interpreter for conveyor/branch/writer programs.
#[derive(Debug, Default)]
pub struct TokenInterpreter {
    program: Option<Program>,
    tape: Tape,
    limit: u32,
    position: Position,
    started: bool,
    running: bool,
    halt: Option<Halt>,
    steps: u32,
}

impl TokenInterpreter {
    /// Creates an interpreter with nothing bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Why the interpreter halted, once it has.
    pub const fn halt(&self) -> Option<Halt> {
        self.halt
    }

    fn finish(&mut self, halt: Halt) {
        self.running = false;
        self.halt = Some(halt);
        trace!(?halt, steps = self.steps, "token halted");
    }

    /// Decides the exit heading for the cell the token is on, applying any
    /// tape effect of that cell.
    fn exit_heading(program: &Program, position: Position, tape: &mut Tape) -> Option<Direction> {
        let start = program.start();
        if position == start.position {
            return Some(start.orientation.forward());
        }
        let tile = program.tile(position)?;
        if let Some((first, second)) = tile.kind.branch_colors() {
            let head = tape.head();
            return Some(if head == first {
                tape.advance();
                tile.first_exit()
            } else if head == second {
                tape.advance();
                tile.second_exit()
            } else {
                tile.forward()
            });
        }
        if let Some(color) = tile.kind.written() {
            tape.push(color);
        }
        Some(tile.forward())
    }
}

impl Interpreter for TokenInterpreter {
    fn set_program(&mut self, program: &Program) {
        self.program = Some(program.clone());
    }

    fn set_tape(&mut self, tape: Tape) {
        self.tape = tape;
    }

    fn set_limit(&mut self, limit: u32) {
        self.limit = limit;
    }

    fn start(&mut self) -> Result<(), StepFault> {
        let program = self.program.as_ref().ok_or(StepFault::NoProgram)?;
        self.position = program.start().position;
        self.started = true;
        self.running = true;
        self.halt = None;
        self.steps = 0;
        Ok(())
    }

    fn step(&mut self) -> Result<(), StepFault> {
        if !self.started {
            return Err(StepFault::NotStarted);
        }
        if !self.running {
            return Err(StepFault::Halted);
        }
        let program = self.program.as_ref().ok_or(StepFault::NoProgram)?;
        self.steps = self.steps.saturating_add(1);

        let Some(heading) = Self::exit_heading(program, self.position, &mut self.tape) else {
            // Only reachable if the token was placed on an empty cell.
            self.finish(Halt::EmptyCell);
            return Ok(());
        };
        let next = self.position.offset(heading);
        let outcome = if !program.contains(next) {
            Some(Halt::OffGrid)
        } else if next == program.end().position {
            Some(Halt::Accepted)
        } else if next != program.start().position && program.tile(next).is_none() {
            Some(Halt::EmptyCell)
        } else {
            None
        };

        if outcome != Some(Halt::OffGrid) {
            self.position = next;
        }
        trace!(position = %self.position, tape = %self.tape, "token moved");

        match outcome {
            Some(halt) => self.finish(halt),
            None if self.limit > 0 && self.steps >= self.limit => self.finish(Halt::LimitReached),
            None => {}
        }
        Ok(())
    }

    fn running(&self) -> bool {
        self.running
    }

    fn accept(&self) -> bool {
        self.halt == Some(Halt::Accepted)
    }

    fn position(&self) -> Position {
        self.position
    }

    fn tape(&self) -> &Tape {
        &self.tape
    }

    fn steps(&self) -> u32 {
        self.steps
    }
}
