//! Numeric diagnostic codes and the toolchain domains that own their ranges.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The toolchain stage owning a range of diagnostic codes.
///
/// Each domain owns the ten-thousand block starting at [`base`](Domain::base),
/// e.g. runtime diagnostics are numbered `60001` and up.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    /// The macro preprocessor, `10xxx`.
    Preprocessor,
    /// The bytecode assembler, `20xxx`.
    Assembly,
    /// The script-language parser, `30xxx`.
    Parser,
    /// The config-file parser, `40xxx`.
    Config,
    /// The static linter, `50xxx`.
    Linting,
    /// The runtime interpreter, `60xxx`.
    Runtime,
}

impl Domain {
    /// All domains in code order.
    pub const ALL: [Domain; 6] = [
        Domain::Preprocessor,
        Domain::Assembly,
        Domain::Parser,
        Domain::Config,
        Domain::Linting,
        Domain::Runtime,
    ];

    /// Returns the first code of this domain's block, minus one.
    pub fn base(self) -> u32 {
        match self {
            Domain::Preprocessor => 10_000,
            Domain::Assembly => 20_000,
            Domain::Parser => 30_000,
            Domain::Config => 40_000,
            Domain::Linting => 50_000,
            Domain::Runtime => 60_000,
        }
    }

    /// Returns the domain whose block contains `code`, if any.
    pub fn of_code(code: u32) -> Option<Domain> {
        Domain::ALL
            .into_iter()
            .find(|d| code > d.base() && code < d.base() + 10_000)
    }

    /// Returns the lowercase domain name.
    pub fn name(self) -> &'static str {
        match self {
            Domain::Preprocessor => "preprocessor",
            Domain::Assembly => "assembly",
            Domain::Parser => "parser",
            Domain::Config => "config",
            Domain::Linting => "linting",
            Domain::Runtime => "runtime",
        }
    }

    /// Parses a lowercase domain name.
    pub fn from_name(name: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|d| d.name() == name)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A stable numeric diagnostic code, e.g. `60070`.
///
/// Codes are a public contract: once shipped, a code keeps its meaning and is
/// never handed to another kind.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode(u32);

impl DiagnosticCode {
    /// Wraps a raw code value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw code value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns the domain owning this code, if the value lies in a known block.
    pub fn domain(self) -> Option<Domain> {
        Domain::of_code(self.0)
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
