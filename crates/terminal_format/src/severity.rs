use strum_macros::{Display, IntoStaticStr};

use crate::palette::Paint;

/// Where an entry point writes its line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The three fixed categories a line can be tagged with
#[derive(Display, IntoStaticStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Error,
    Warning,
}

impl Severity {
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn paint(self) -> Paint {
        match self {
            Severity::Info => Paint::Cyan,
            Severity::Error => Paint::Red,
            Severity::Warning => Paint::Yellow,
        }
    }

    pub fn stream(self) -> Stream {
        match self {
            Severity::Error => Stream::Stderr,
            Severity::Info | Severity::Warning => Stream::Stdout,
        }
    }

    /// Coloured label used as the line prefix
    pub fn tag(self) -> String {
        self.paint().paint(self.label())
    }
}
