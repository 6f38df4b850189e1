//! Operation tags that prefix every rendered and persisted line.

use crate::fmt::NamedColor;
use std::fmt;

/// One variant per console operation — the bracketed tag identifies which
/// operation produced a line, both on the terminal and in the audit file.
///
/// There is no severity ordering and no minimum-level filtering: console
/// semantics print everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Level {
    #[default]
    Log,
    Debug,
    Info,
    Warn,
    Error,
    Assert,
    Clear,
    Count,
    Dir,
    Dirxml,
    Group,
    GroupCollapsed,
    GroupEnd,
    Table,
    Time,
    TimeLog,
    TimeEnd,
    Timestamp,
    Trace,
    Profile,
    ProfileEnd,
    Progress,
}

impl Level {
    /// Uppercase because the bracketed tag is the grep anchor in the audit file.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Log => "LOG",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Assert => "ASSERT",
            Self::Clear => "CLEAR",
            Self::Count => "COUNT",
            Self::Dir => "DIR",
            Self::Dirxml => "DIRXML",
            Self::Group => "GROUP",
            Self::GroupCollapsed => "GROUPCOLLAPSED",
            Self::GroupEnd => "GROUPEND",
            Self::Table => "TABLE",
            Self::Time => "TIME",
            Self::TimeLog => "TIMELOG",
            Self::TimeEnd => "TIMEEND",
            Self::Timestamp => "TIMESTAMP",
            Self::Trace => "TRACE",
            Self::Profile => "PROFILE",
            Self::ProfileEnd => "PROFILEEND",
            Self::Progress => "PROGRESS",
        }
    }

    /// Color used when no overlay overrides it.
    #[must_use]
    pub const fn default_color(self) -> NamedColor {
        match self {
            Self::Log | Self::Dir | Self::Dirxml | Self::Table => NamedColor::White,
            Self::Debug | Self::Info | Self::Timestamp | Self::Profile | Self::ProfileEnd => {
                NamedColor::Green
            }
            Self::Warn => NamedColor::Yellow,
            Self::Error | Self::Assert => NamedColor::Red,
            Self::Clear => NamedColor::Gray,
            Self::Count | Self::Group | Self::GroupCollapsed | Self::GroupEnd | Self::Progress => {
                NamedColor::Cyan
            }
            Self::Time | Self::TimeLog | Self::TimeEnd | Self::Trace => NamedColor::Magenta,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
