mod calculator;
mod help;

pub use calculator::CalculatorScreen;
pub use help::{HelpDialog, HelpTopic};
