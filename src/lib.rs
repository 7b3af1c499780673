//! # Desk Calc
//!
//! A desk-calculator engine: digits and operator symbols go in, a running
//! result and a description of the computation come out.
//!
//! ## Design Principles
//!
//! - **Immediate execution**: binary operators resolve left to right, with no
//!   precedence (`3 + 4 × 2` is `14`)
//! - **Permissive input**: unknown symbols and missing operands are ignored
//! - **Float semantics**: division by zero and NaN show through as values
//! - **Fixed symbol table**: operations are configured once per brain
//!
//! ## Example
//!
//! ```no_run
//! use desk_calc::CalculatorEngine;
//! use std::io::Cursor;
//!
//! let csv = "key\n4\n×\n5\n=\n";
//! let mut engine = CalculatorEngine::new();
//! engine.process_csv(Cursor::new(csv)).unwrap();
//! engine.write_output(std::io::stdout()).unwrap();
//! ```

pub mod accumulator;
pub mod brain;
pub mod engine;
pub mod error;
pub mod keypad;
pub mod operation;

pub use accumulator::{Accumulator, PendingBinaryOperation};
pub use brain::CalculatorBrain;
pub use engine::{CalculatorEngine, Frame, KeyRecord};
pub use error::{CalcError, Result};
pub use keypad::{format_number, Key, KeypadSession};
pub use operation::{Operation, OperationTable};
