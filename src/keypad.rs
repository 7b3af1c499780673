//! Headless keypad: turns key presses into brain calls and renders the
//! display and history lines.

use crate::brain::CalculatorBrain;
use crate::error::{CalcError, Result};
use crate::operation::OperationTable;
use log::debug;

/// Key that discards the brain and starts over.
pub const RESET_KEY: &str = "AC";

/// Decimal point key.
pub const DECIMAL_POINT: char = '.';

/// A classified key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'a> {
    /// `0`-`9` or the decimal point.
    Digit(char),

    /// Full reset.
    Reset,

    /// Anything else, forwarded to the brain as a symbol.
    Operation(&'a str),
}

impl<'a> Key<'a> {
    /// Classifies a raw key label.
    pub fn parse(label: &'a str) -> Key<'a> {
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_digit() || c == DECIMAL_POINT => Key::Digit(c),
            _ if label == RESET_KEY => Key::Reset,
            _ => Key::Operation(label),
        }
    }
}

/// A calculator session: the display buffer plus the brain it drives.
#[derive(Debug, Clone)]
pub struct KeypadSession {
    /// Template used to build a fresh brain on reset.
    operations: OperationTable,

    brain: CalculatorBrain,

    /// Main display text.
    display: String,

    /// `true` while the user is entering a number.
    typing: bool,
}

impl KeypadSession {
    /// Creates a session with the standard operation table.
    pub fn new() -> Self {
        Self::with_operations(OperationTable::standard())
    }

    /// Creates a session whose brain uses a custom operation table.
    pub fn with_operations(operations: OperationTable) -> Self {
        KeypadSession {
            brain: CalculatorBrain::with_operations(operations.clone()),
            operations,
            display: String::from("0"),
            typing: false,
        }
    }

    /// Handles one key press.
    ///
    /// Fails only when the typed display text cannot be read as a number;
    /// the key is then dropped and the session is left untouched.
    pub fn press(&mut self, label: &str) -> Result<()> {
        match Key::parse(label) {
            Key::Digit(digit) => {
                self.press_digit(digit);
                Ok(())
            }
            Key::Reset => {
                self.reset();
                Ok(())
            }
            Key::Operation(symbol) => self.press_operation(symbol),
        }
    }

    /// Appends a digit or decimal point to the display.
    pub fn press_digit(&mut self, digit: char) {
        if self.typing {
            if digit == DECIMAL_POINT && self.display.contains(DECIMAL_POINT) {
                debug!("Ignoring second decimal point");
                return;
            }
            self.display.push(digit);
        } else {
            self.display = if digit == DECIMAL_POINT {
                String::from("0.")
            } else {
                digit.to_string()
            };
            self.typing = true;
        }
    }

    /// Commits any typed operand, then applies `symbol`.
    pub fn press_operation(&mut self, symbol: &str) -> Result<()> {
        if self.typing {
            let value = self.display_value()?;
            self.brain.set_operand(value, self.display.clone());
        }
        self.typing = false;

        self.brain.perform_operation(symbol);

        if let Some(result) = self.brain.result() {
            self.display = format_number(result);
        }
        Ok(())
    }

    /// Discards the brain and clears the display.
    pub fn reset(&mut self) {
        self.brain = CalculatorBrain::with_operations(self.operations.clone());
        self.display = String::from("0");
        self.typing = false;
    }

    /// Main display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// History line: the description suffixed with `" ... "` while pending
    /// or `" = "` once resolved. Trailing blanks of an unfinished preview
    /// (`"4 × "`) are dropped before the suffix.
    pub fn history(&self) -> String {
        match self.brain.description() {
            Some(description) if self.brain.result_is_pending() => {
                format!("{} ... ", description.trim_end())
            }
            Some(description) => format!("{} = ", description.trim_end()),
            None => String::new(),
        }
    }

    /// Returns `true` while a binary operation awaits its second operand.
    pub fn is_pending(&self) -> bool {
        self.brain.result_is_pending()
    }

    /// Returns `true` while a number is being typed.
    pub fn is_typing(&self) -> bool {
        self.typing
    }

    /// The brain behind this session.
    pub fn brain(&self) -> &CalculatorBrain {
        &self.brain
    }

    fn display_value(&self) -> Result<f64> {
        self.display
            .parse::<f64>()
            .map_err(|_| CalcError::InvalidOperand {
                text: self.display.clone(),
            })
    }
}

impl Default for KeypadSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats a result for the display (`20`, `0.5`, `inf`, `NaN`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}
