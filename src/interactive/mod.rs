//! Interactive console play

mod console;

pub use console::{ConsoleStrategy, HELP};
