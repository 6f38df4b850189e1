//! Message formatting: color tokens, per-character transforms, and deep
//! value inspection.

mod color;
mod inspect;
mod transform;

pub use color::{ColorToken, NamedColor, ParseColorError, RESET, Rgb, colorize};
pub use inspect::{InspectOptions, inspect, stringify_arg};
pub use transform::{color_mapify, rainbowify, strip_ansi};
