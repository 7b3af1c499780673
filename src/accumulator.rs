//! Accumulator and pending binary operation records.

use crate::operation::{BinaryDescribeFn, BinaryFn};

/// The calculator's current value together with a description of how it
/// was derived.
///
/// The brain holds it as `Option<Accumulator>`; `None` means no value has
/// been entered yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Accumulator {
    /// Current numeric value. May be infinite or NaN.
    pub value: f64,

    /// Human-readable derivation, e.g. `"√(16) + 2"`.
    pub description: String,
}

impl Accumulator {
    /// Creates an accumulator from a value and its label.
    pub fn new(value: f64, description: impl Into<String>) -> Self {
        Accumulator {
            value,
            description: description.into(),
        }
    }

    /// Resets the value to zero, keeping the description.
    pub fn zero(&mut self) {
        self.value = 0.0;
    }
}

/// A binary operation captured together with its first operand, waiting for
/// the second one.
#[derive(Clone)]
pub struct PendingBinaryOperation {
    function: BinaryFn,
    describe: BinaryDescribeFn,
    first_operand: Accumulator,
}

impl PendingBinaryOperation {
    /// Captures `first_operand` for a later [`PendingBinaryOperation::resolve`].
    pub fn new(function: BinaryFn, describe: BinaryDescribeFn, first_operand: Accumulator) -> Self {
        PendingBinaryOperation {
            function,
            describe,
            first_operand,
        }
    }

    /// The operand captured when the operator was pressed (for testing).
    #[cfg(test)]
    pub fn first_operand(&self) -> &Accumulator {
        &self.first_operand
    }

    /// Applies the operation to the second operand, producing the new
    /// accumulator.
    pub fn resolve(&self, second_operand: &Accumulator) -> Accumulator {
        Accumulator {
            value: (self.function)(self.first_operand.value, second_operand.value),
            description: self.describe(&second_operand.description),
        }
    }

    /// Describes the operation with the given second-operand description.
    ///
    /// Does not resolve anything; used for the live preview while the second
    /// operand is still being entered.
    pub fn describe(&self, second_description: &str) -> String {
        (self.describe)(&self.first_operand.description, second_description)
    }
}

impl std::fmt::Debug for PendingBinaryOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingBinaryOperation")
            .field("first_operand", &self.first_operand)
            .finish_non_exhaustive()
    }
}
