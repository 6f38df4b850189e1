//! Output sinks: the rotating audit file and the terminal writer.

mod file;
mod terminal;

pub use file::FileSink;
pub use terminal::Term;
