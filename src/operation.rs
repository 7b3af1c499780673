//! Operation model and the symbol table the calculator dispatches on.

use std::collections::HashMap;
use std::f64::consts;
use std::fmt;

/// Computes the value of a unary operation.
pub type UnaryFn = fn(f64) -> f64;

/// Describes a unary operation applied to an operand description.
pub type UnaryDescribeFn = fn(&str) -> String;

/// Computes the value of a binary operation.
pub type BinaryFn = fn(f64, f64) -> f64;

/// Describes a binary operation applied to two operand descriptions.
pub type BinaryDescribeFn = fn(&str, &str) -> String;

/// An operation bound to a key symbol.
#[derive(Clone, Copy)]
pub enum Operation {
    /// Replaces the accumulator with a fixed value and label.
    Constant(f64, &'static str),

    /// Transforms the accumulator in place.
    Unary(UnaryFn, UnaryDescribeFn),

    /// Defers until a second operand is supplied.
    Binary(BinaryFn, BinaryDescribeFn),

    /// Resolves the pending binary operation.
    Equals,

    /// Zeroes the accumulator value.
    Clear,
}

impl Operation {
    /// Short variant name, used in debug logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Constant(..) => "constant",
            Operation::Unary(..) => "unary",
            Operation::Binary(..) => "binary",
            Operation::Equals => "equals",
            Operation::Clear => "clear",
        }
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Constant(value, label) => {
                f.debug_tuple("Constant").field(value).field(label).finish()
            }
            Operation::Unary(..) => f.write_str("Unary"),
            Operation::Binary(..) => f.write_str("Binary"),
            Operation::Equals => f.write_str("Equals"),
            Operation::Clear => f.write_str("Clear"),
        }
    }
}

/// Mapping from key symbol to [`Operation`].
///
/// Built once and handed to a [`crate::CalculatorBrain`], which never
/// modifies it. The symbol set is deployment data: use
/// [`OperationTable::standard`] for the usual desk-calculator keys, or build
/// a custom table with [`OperationTable::with`].
///
/// # Examples
///
/// ```
/// use desk_calc::{Operation, OperationTable};
///
/// let table = OperationTable::new()
///     .with("+", Operation::Binary(|a, b| a + b, |a, b| format!("{a} + {b}")))
///     .with("=", Operation::Equals);
/// assert_eq!(table.len(), 2);
/// assert!(table.get("×").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OperationTable {
    operations: HashMap<String, Operation>,
}

impl OperationTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        OperationTable {
            operations: HashMap::new(),
        }
    }

    /// Adds (or replaces) the operation bound to `symbol`.
    pub fn with(mut self, symbol: impl Into<String>, operation: Operation) -> Self {
        self.operations.insert(symbol.into(), operation);
        self
    }

    /// The standard desk-calculator key set.
    ///
    /// Constants `π` and `e`; unary `√`, `cos`, `sin`, `tan`, `±`; binary `×`,
    /// `÷`, `+`, `−` (U+2212); `=` and `C`.
    pub fn standard() -> Self {
        OperationTable::new()
            .with("π", Operation::Constant(consts::PI, "π"))
            .with("e", Operation::Constant(consts::E, "e"))
            .with("√", Operation::Unary(f64::sqrt, |d| format!("√({d})")))
            .with("cos", Operation::Unary(f64::cos, |d| format!("cos({d})")))
            .with("sin", Operation::Unary(f64::sin, |d| format!("sin({d})")))
            .with("tan", Operation::Unary(f64::tan, |d| format!("tan({d})")))
            .with("±", Operation::Unary(|x| -x, |d| format!("±{d}")))
            .with(
                "×",
                Operation::Binary(|a, b| a * b, |a, b| format!("{a} × {b}")),
            )
            .with(
                "÷",
                Operation::Binary(|a, b| a / b, |a, b| format!("{a} ÷ {b}")),
            )
            .with(
                "+",
                Operation::Binary(|a, b| a + b, |a, b| format!("{a} + {b}")),
            )
            .with(
                "−",
                Operation::Binary(|a, b| a - b, |a, b| format!("{a} − {b}")),
            )
            .with("=", Operation::Equals)
            .with("C", Operation::Clear)
    }

    /// Looks up the operation bound to `symbol`.
    pub fn get(&self, symbol: &str) -> Option<&Operation> {
        self.operations.get(symbol)
    }

    /// Number of bound symbols.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Returns `true` if no symbol is bound.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }
}
