//! Streaming key-press processor.
//!
//! Reads key presses from CSV, replays them through a single keypad session
//! and records what the calculator shows after each one.

use crate::error::{CalcError, Result};
use crate::keypad::KeypadSession;
use crate::operation::OperationTable;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// Raw key record as read from CSV.
#[derive(Debug, Deserialize)]
pub struct KeyRecord {
    /// Key label: a digit, `.`, `AC`, or an operation symbol.
    pub key: String,
}

/// What the calculator shows after one key press.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// 1-based index of the accepted key.
    pub step: usize,

    /// The key that was pressed.
    pub key: String,

    /// Main display text.
    pub display: String,

    /// History line.
    pub history: String,

    /// Whether a binary operation awaits its second operand.
    pub pending: bool,
}

/// The calculator engine.
///
/// Drives one keypad session for the whole input. Frames are kept in input
/// order.
pub struct CalculatorEngine {
    session: KeypadSession,
    frames: Vec<Frame>,
}

impl CalculatorEngine {
    /// Creates an engine with the standard operation table.
    pub fn new() -> Self {
        Self::with_operations(OperationTable::standard())
    }

    /// Creates an engine with a custom operation table.
    pub fn with_operations(operations: OperationTable) -> Self {
        CalculatorEngine {
            session: KeypadSession::with_operations(operations),
            frames: Vec::new(),
        }
    }

    /// Processes key presses from a CSV reader in streaming fashion.
    ///
    /// Invalid records are logged at warn level and skipped.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<KeyRecord>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(record) => {
                    if let Err(e) = self.process_key(&record.key, row_num) {
                        warn!("Row {}: {}", row_num, e);
                    }
                }
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Presses one key and records the resulting frame.
    pub fn process_key(&mut self, key: &str, row: usize) -> Result<()> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CalcError::InvalidKey {
                row,
                message: "empty key".to_string(),
            });
        }

        self.session.press(key).map_err(|e| CalcError::InvalidKey {
            row,
            message: e.to_string(),
        })?;

        let frame = Frame {
            step: self.frames.len() + 1,
            key: key.to_string(),
            display: self.session.display().to_string(),
            history: self.session.history(),
            pending: self.session.is_pending(),
        };
        debug!(
            "Row {}: {:?} -> display {:?}, history {:?}",
            row, frame.key, frame.display, frame.history
        );
        self.frames.push(frame);

        Ok(())
    }

    /// Frames recorded so far.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Writes the transcript to CSV.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        csv_writer.write_record(["step", "key", "display", "history", "pending"])?;
        for frame in &self.frames {
            csv_writer.serialize(frame)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}
