//! JSON-hash level format.
//!
//! ```text
//! {"title": "...",
//!  "tape": ["RB", ...],
//!  "testCases": [{"accept": true, "input": "RB", "output": "", "limit": 0}, ...],
//!  "program": {"cols": 9, "rows": 9,
//!              "cells": [{"x": 4, "y": 1, "orientation": "ID", "type": "Conveyor"}, ...],
//!              "start": {"x": 4, "y": 0, "orientation": "ID"},
//!              "end":   {"x": 4, "y": 8, "orientation": "ID"}}}
//! ```
//!
//! `tape` lists the input tapes only and exists for older readers. When
//! `testCases` is present it wins; otherwise every `tape` entry becomes a
//! case that expects acceptance and checks no output.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{Level, TestCase};
use crate::common::{DecodeError, EditError, Orientation, Position};
use crate::program::{Endpoint, Program, Tile, TileKind};
use crate::tape::Tape;

#[derive(Debug, Serialize, Deserialize)]
struct LevelDoc {
    title: String,
    #[serde(default)]
    tape: Vec<String>,
    #[serde(default, rename = "testCases", skip_serializing_if = "Option::is_none")]
    test_cases: Option<Vec<TestCaseDoc>>,
    program: ProgramDoc,
}

#[derive(Debug, Serialize, Deserialize)]
struct TestCaseDoc {
    accept: bool,
    input: String,
    #[serde(default)]
    output: String,
    #[serde(default)]
    limit: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProgramDoc {
    cols: u32,
    rows: u32,
    #[serde(default)]
    cells: Vec<CellDoc>,
    start: EndpointDoc,
    end: EndpointDoc,
}

#[derive(Debug, Serialize, Deserialize)]
struct CellDoc {
    x: i32,
    y: i32,
    orientation: Orientation,
    #[serde(rename = "type")]
    kind: TileKind,
}

#[derive(Debug, Serialize, Deserialize)]
struct EndpointDoc {
    x: i32,
    y: i32,
    #[serde(default)]
    orientation: Orientation,
}

impl From<Endpoint> for EndpointDoc {
    fn from(e: Endpoint) -> Self {
        Self {
            x: e.position.x,
            y: e.position.y,
            orientation: e.orientation,
        }
    }
}

impl From<&EndpointDoc> for Endpoint {
    fn from(doc: &EndpointDoc) -> Self {
        Self::new(Position::new(doc.x, doc.y), doc.orientation)
    }
}

/// Encodes a level as a JSON-hash document.
pub fn encode(level: &Level) -> String {
    let program = &level.program;
    let doc = LevelDoc {
        title: level.title.clone(),
        tape: level
            .test_cases
            .iter()
            .map(|t| t.input.to_string())
            .collect(),
        test_cases: Some(
            level
                .test_cases
                .iter()
                .map(|t| TestCaseDoc {
                    accept: t.accept,
                    input: t.input.to_string(),
                    output: t.output.to_string(),
                    limit: t.limit,
                })
                .collect(),
        ),
        program: ProgramDoc {
            cols: program.cols(),
            rows: program.rows(),
            cells: program
                .cells()
                .map(|(p, t)| CellDoc {
                    x: p.x,
                    y: p.y,
                    orientation: t.orientation,
                    kind: t.kind,
                })
                .collect(),
            start: program.start().into(),
            end: program.end().into(),
        },
    };
    // A document built from plain strings, integers and unit enums always serializes.
    serde_json::to_string(&doc).unwrap_or_default()
}

/// Decodes and validates a JSON-hash document.
///
/// # Errors
///
/// [`DecodeError::Json`] for malformed JSON or a wrong shape,
/// [`DecodeError::Schema`] for an impossible program, and
/// [`DecodeError::Symbol`] for a bad tape letter.
pub fn decode(text: &str) -> Result<Level, DecodeError> {
    let doc: LevelDoc = serde_json::from_str(text)?;
    let program = build_program(&doc.program)?;

    let test_cases = match doc.test_cases {
        Some(cases) => cases
            .iter()
            .map(|c| {
                Ok(TestCase {
                    accept: c.accept,
                    input: c.input.parse()?,
                    output: c.output.parse()?,
                    limit: c.limit,
                })
            })
            .collect::<Result<Vec<_>, DecodeError>>()?,
        None => doc
            .tape
            .iter()
            .map(|input| {
                Ok(TestCase {
                    input: input.parse::<Tape>()?,
                    ..TestCase::default_case()
                })
            })
            .collect::<Result<Vec<_>, DecodeError>>()?,
    };

    Ok(Level {
        title: doc.title,
        test_cases,
        program,
    })
}

fn build_program(doc: &ProgramDoc) -> Result<Program, DecodeError> {
    let mut program = Program::new(doc.cols, doc.rows).map_err(schema)?;
    let start = Endpoint::from(&doc.start);
    let end = Endpoint::from(&doc.end);
    program.set_endpoints(start, end).map_err(schema)?;

    let mut seen = HashSet::with_capacity(doc.cells.len());
    for cell in &doc.cells {
        let position = Position::new(cell.x, cell.y);
        if !seen.insert(position) {
            return Err(DecodeError::Schema(format!("duplicate cell {position}")));
        }
        program
            .set_tile(position, Tile::new(cell.kind, cell.orientation))
            .map_err(schema)?;
    }
    Ok(program)
}

fn schema(e: EditError) -> DecodeError {
    DecodeError::Schema(e.to_string())
}
