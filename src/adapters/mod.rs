pub mod console;

pub use console::{ConsoleDialog, ConsoleEventPort, ConsoleProgressArc};
