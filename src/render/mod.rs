//! Terminal-only renderers: tables, charts, and progress bars.

pub mod chart;
pub mod progress;
pub mod table;

pub use chart::ChartOptions;
pub use progress::DEFAULT_BAR_LEN;
