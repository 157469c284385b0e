//! Runtime value types as reported in type-mismatch diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of a script value at runtime.
///
/// Diagnostics carry these to describe expected and actual operand types.
/// `Na` stands for "not applicable" and marks an absent operand, e.g. the
/// left side of a unary operator invocation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum ValueType {
    /// No operand / not applicable.
    Na,
    /// The empty value.
    Nothing,
    /// Wildcard accepted by any operator slot.
    Any,
    /// Numbers.
    Scalar,
    /// Booleans.
    Bool,
    /// Arrays of values.
    Array,
    /// Strings.
    String,
    /// Variable namespaces.
    Namespace,
    /// Not-a-number placeholder.
    Nan,
    /// Intermediate value of an `if` construct.
    If,
    /// Intermediate value of a `while` construct.
    While,
    /// Intermediate value of a `for` construct.
    For,
    /// Intermediate value of a `switch` construct.
    Switch,
    /// Intermediate value of a `try` construct.
    Exception,
    /// Intermediate value of a `with` construct.
    With,
    /// Code blocks.
    Code,
    /// World objects.
    Object,
    /// Sides.
    Side,
    /// Groups.
    Group,
    /// Structured text.
    Text,
    /// Script handles.
    Script,
    /// Config entries.
    Config,
    /// UI displays.
    Display,
    /// UI controls.
    Control,
    /// Map locations.
    Location,
    /// Team members.
    TeamMember,
    /// Tasks.
    Task,
    /// Diary records.
    DiaryRecord,
    /// Network objects.
    NetObject,
}

impl ValueType {
    /// Returns the canonical upper-case name used in diagnostic text.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Na => "NA",
            ValueType::Nothing => "NOTHING",
            ValueType::Any => "ANY",
            ValueType::Scalar => "SCALAR",
            ValueType::Bool => "BOOL",
            ValueType::Array => "ARRAY",
            ValueType::String => "STRING",
            ValueType::Namespace => "NAMESPACE",
            ValueType::Nan => "NaN",
            ValueType::If => "IF",
            ValueType::While => "WHILE",
            ValueType::For => "FOR",
            ValueType::Switch => "SWITCH",
            ValueType::Exception => "EXCEPTION",
            ValueType::With => "WITH",
            ValueType::Code => "CODE",
            ValueType::Object => "OBJECT",
            ValueType::Side => "SIDE",
            ValueType::Group => "GROUP",
            ValueType::Text => "TEXT",
            ValueType::Script => "SCRIPT",
            ValueType::Config => "CONFIG",
            ValueType::Display => "DISPLAY",
            ValueType::Control => "CONTROL",
            ValueType::Location => "LOCATION",
            ValueType::TeamMember => "TEAM_MEMBER",
            ValueType::Task => "TASK",
            ValueType::DiaryRecord => "DIARY_RECORD",
            ValueType::NetObject => "NetObject",
        }
    }

    /// Returns `true` for [`Na`](ValueType::Na), the absent-operand marker.
    pub fn is_na(self) -> bool {
        self == ValueType::Na
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
