use std::fmt::{Display, Formatter};

/// Swedish bidding zone.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, clap::ValueEnum)]
#[value(rename_all = "UPPER")]
pub enum Zone {
    /// Luleå / northern Sweden.
    Se1,

    /// Sundsvall / northern central Sweden.
    Se2,

    /// Stockholm / southern central Sweden.
    Se3,

    /// Malmö / southern Sweden.
    Se4,
}

impl Zone {
    /// The identifier the upstream feed uses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Se1 => "SE1",
            Self::Se2 => "SE2",
            Self::Se3 => "SE3",
            Self::Se4 => "SE4",
        }
    }
}

impl Display for Zone {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}
