//! Operation-accumulation state machine.
//!
//! The brain moves between three states: empty, holding an accumulator, and
//! holding an accumulator plus a pending binary operation. Every operation
//! whose inputs are absent is ignored rather than reported.

use crate::accumulator::{Accumulator, PendingBinaryOperation};
use crate::operation::{Operation, OperationTable};
use log::debug;

/// The calculator engine.
///
/// Owns the accumulator, at most one pending binary operation, and the
/// operation table it was built with. There is no reset operation: callers
/// discard the brain and build a new one.
///
/// # Examples
///
/// ```
/// use desk_calc::CalculatorBrain;
///
/// let mut brain = CalculatorBrain::new();
/// brain.set_operand(4.0, "4");
/// brain.perform_operation("×");
/// brain.set_operand(5.0, "5");
/// assert_eq!(brain.description().as_deref(), Some("4 × 5"));
/// brain.perform_operation("=");
/// assert_eq!(brain.result(), Some(20.0));
/// assert!(!brain.result_is_pending());
/// ```
#[derive(Debug, Clone)]
pub struct CalculatorBrain {
    /// Symbol bindings, fixed at construction.
    operations: OperationTable,

    /// Current value, absent until an operand or constant is entered.
    accumulator: Option<Accumulator>,

    /// Binary operation waiting for its second operand.
    pending: Option<PendingBinaryOperation>,
}

impl CalculatorBrain {
    /// Creates an empty brain with the standard operation table.
    pub fn new() -> Self {
        Self::with_operations(OperationTable::standard())
    }

    /// Creates an empty brain bound to a custom operation table.
    pub fn with_operations(operations: OperationTable) -> Self {
        CalculatorBrain {
            operations,
            accumulator: None,
            pending: None,
        }
    }

    /// Overwrites the accumulator.
    pub fn set_operand(&mut self, value: f64, label: impl Into<String>) {
        self.accumulator = Some(Accumulator::new(value, label));
    }

    /// Applies the operation bound to `symbol`.
    ///
    /// Unknown symbols are ignored.
    pub fn perform_operation(&mut self, symbol: &str) {
        let operation = match self.operations.get(symbol) {
            Some(operation) => *operation,
            None => {
                debug!("Ignoring unknown symbol {:?}", symbol);
                return;
            }
        };
        debug!("Applying {} {:?}", operation.kind(), symbol);

        match operation {
            Operation::Constant(value, label) => {
                self.accumulator = Some(Accumulator::new(value, label));
            }
            Operation::Unary(function, describe) => match self.accumulator.as_mut() {
                Some(acc) => {
                    acc.value = function(acc.value);
                    acc.description = describe(&acc.description);
                }
                None => debug!("Ignoring {:?}: no operand", symbol),
            },
            Operation::Binary(function, describe) => {
                if self.pending.is_some() {
                    self.perform_pending_operation();
                }
                // Guard uses the post-resolution accumulator.
                match self.accumulator.take() {
                    Some(first_operand) => {
                        self.pending = Some(PendingBinaryOperation::new(
                            function,
                            describe,
                            first_operand,
                        ));
                    }
                    None => debug!("Ignoring {:?}: no first operand", symbol),
                }
            }
            Operation::Equals => self.perform_pending_operation(),
            Operation::Clear => match self.accumulator.as_mut() {
                Some(acc) => acc.zero(),
                None => debug!("Ignoring {:?}: nothing to clear", symbol),
            },
        }
    }

    /// Resolves the pending operation if both it and a second operand exist.
    fn perform_pending_operation(&mut self) {
        let resolved = match (&self.pending, &self.accumulator) {
            (Some(pending), Some(second_operand)) => pending.resolve(second_operand),
            (Some(_), None) => {
                debug!("Pending operation kept: no second operand");
                return;
            }
            (None, _) => {
                debug!("Nothing to resolve");
                return;
            }
        };

        self.accumulator = Some(resolved);
        self.pending = None;
    }

    /// Current value, if any.
    pub fn result(&self) -> Option<f64> {
        self.accumulator.as_ref().map(|acc| acc.value)
    }

    /// Returns `true` while a binary operation awaits its second operand.
    pub fn result_is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Description of the computation so far.
    ///
    /// While pending, this is a preview built from the first operand and the
    /// current accumulator (or an empty string); it is not stored.
    pub fn description(&self) -> Option<String> {
        match &self.pending {
            Some(pending) => {
                let second = self
                    .accumulator
                    .as_ref()
                    .map(|acc| acc.description.as_str())
                    .unwrap_or("");
                Some(pending.describe(second))
            }
            None => self.accumulator.as_ref().map(|acc| acc.description.clone()),
        }
    }

    /// The operation table this brain dispatches on.
    pub fn operations(&self) -> &OperationTable {
        &self.operations
    }

    /// Returns a reference to the accumulator (for testing).
    #[cfg(test)]
    pub fn accumulator(&self) -> Option<&Accumulator> {
        self.accumulator.as_ref()
    }
}

impl Default for CalculatorBrain {
    fn default() -> Self {
        Self::new()
    }
}
