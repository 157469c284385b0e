//! Diagnostics raised by the virtual machine while executing scripts (`60xxx`).
//!
//! Most precondition failures come as a Strong/Weak pair: both variants wrap
//! the same payload struct and render the same text, and only the kind (and with it
//! severity and code) differs. Callers choose the Weak variant where the VM
//! can recover with a default value.

use crate::kind::DiagnosticKind;
use crate::render::{ConfigPath, IndexPath, OneOf};
use sqfvm_common::ValueType;
use std::fmt;

/// Expected size of an array, either an exact count or an inclusive range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArraySize {
    min: usize,
    max: usize,
    got: usize,
}

impl ArraySize {
    /// An array that must hold exactly `expected` elements.
    pub fn exact(expected: usize, got: usize) -> Self {
        ArraySize {
            min: expected,
            max: expected,
            got,
        }
    }

    /// An array that must hold between `min` and `max` elements, inclusive.
    ///
    /// # Panics
    ///
    /// Panics if `min > max`.
    pub fn range(min: usize, max: usize, got: usize) -> Self {
        assert!(
            min <= max,
            "array size range is inverted: min {min} exceeds max {max}"
        );
        ArraySize { min, max, got }
    }

    /// Smallest accepted size.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest accepted size.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Actual size of the array.
    pub fn got(&self) -> usize {
        self.got
    }
}

impl fmt::Display for ArraySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "expected {}, got {}", self.min, self.got)
        } else {
            write!(
                f,
                "expected between {} and {}, got {}",
                self.min, self.max, self.got
            )
        }
    }
}

/// An array element whose type is not one of the accepted types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayElementType {
    position: usize,
    expected: Vec<ValueType>,
    got: ValueType,
}

impl ArrayElementType {
    /// Creates the payload for the element at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `expected` is empty.
    pub fn new(position: usize, expected: impl Into<Vec<ValueType>>, got: ValueType) -> Self {
        let expected = expected.into();
        assert!(
            !expected.is_empty(),
            "array element type mismatch needs at least one expected type"
        );
        ArrayElementType {
            position,
            expected,
            got,
        }
    }

    /// Index of the offending element.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Accepted types.
    pub fn expected(&self) -> &[ValueType] {
        &self.expected
    }

    /// Actual type of the element.
    pub fn got(&self) -> ValueType {
        self.got
    }
}

/// An element inside a nested array whose type is not one of the accepted types.
///
/// `positions` is the index path from the outermost array down to the element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubArrayElementType {
    positions: Vec<usize>,
    expected: Vec<ValueType>,
    got: ValueType,
}

impl SubArrayElementType {
    /// Creates the payload for the element at the index path `positions`.
    ///
    /// # Panics
    ///
    /// Panics if `positions` or `expected` is empty.
    pub fn new(
        positions: impl Into<Vec<usize>>,
        expected: impl Into<Vec<ValueType>>,
        got: ValueType,
    ) -> Self {
        let positions = positions.into();
        let expected = expected.into();
        assert!(
            !positions.is_empty(),
            "sub-array type mismatch needs an index path"
        );
        assert!(
            !expected.is_empty(),
            "sub-array type mismatch needs at least one expected type"
        );
        SubArrayElementType {
            positions,
            expected,
            got,
        }
    }

    /// Index path to the offending element.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Accepted types.
    pub fn expected(&self) -> &[ValueType] {
        &self.expected
    }

    /// Actual type of the element.
    pub fn got(&self) -> ValueType {
        self.got
    }
}

/// An array holding fewer elements than a lower bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinimumArraySize {
    /// Smallest accepted size.
    pub expected: usize,
    /// Actual size of the array.
    pub got: usize,
}

impl MinimumArraySize {
    /// Creates the payload for an array of size `got` that needs at least `expected` elements.
    pub fn new(expected: usize, got: usize) -> Self {
        MinimumArraySize { expected, got }
    }
}

/// An index checked against the size of the array it addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexRange {
    /// Size of the array.
    pub range: usize,
    /// Offending index.
    pub index: usize,
}

impl IndexRange {
    /// Creates the payload for `index` into an array of size `range`.
    pub fn new(range: usize, index: usize) -> Self {
        IndexRange { range, index }
    }
}

/// A `from..to` index range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexBounds {
    /// Start of the range.
    pub from: usize,
    /// End of the range.
    pub to: usize,
}

impl IndexBounds {
    /// Creates the payload for the range `from..to`.
    pub fn new(from: usize, to: usize) -> Self {
        IndexBounds { from, to }
    }
}

/// A value whose type differs from the one required.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypeExpectation {
    /// What was expected.
    pub expected: ValueType,
    /// What was found.
    pub got: ValueType,
}

impl TypeExpectation {
    /// Creates the payload for a `got` value where `expected` was required.
    pub fn new(expected: ValueType, got: ValueType) -> Self {
        TypeExpectation { expected, got }
    }
}

/// A config entry looked up below a class path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Class path searched, outermost class first.
    pub path: Vec<String>,
    /// Name of the missing entry.
    pub name: String,
}

impl ConfigEntry {
    /// Creates the payload for `name` looked up below `path`.
    pub fn new<P, S>(path: P, name: impl Into<String>) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ConfigEntry {
            path: path.into_iter().map(Into::into).collect(),
            name: name.into(),
        }
    }
}

/// A named callstack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallstackLookup {
    /// Callstack name.
    pub callstack: String,
}

impl CallstackLookup {
    /// Creates the payload for the callstack called `callstack`.
    pub fn new(callstack: impl Into<String>) -> Self {
        CallstackLookup {
            callstack: callstack.into(),
        }
    }
}

/// Payload of a runtime diagnostic.
#[derive(Clone, Debug, PartialEq)]
pub enum RuntimeDiagnostic {
    /// The VM aborted; carries the rendered call stack.
    Stacktrace {
        /// Rendered call stack.
        stacktrace: String,
    },
    /// The instruction limit was hit.
    MaximumInstructionCountReached {
        /// Configured instruction limit.
        maximum: u64,
    },
    /// An array has the wrong number of elements.
    ExpectedArraySizeMismatch(ArraySize),
    /// An array has the wrong number of elements.
    ExpectedArraySizeMismatchWeak(ArraySize),
    /// An array has fewer elements than required.
    ExpectedMinimumArraySizeMismatch(MinimumArraySize),
    /// An array has fewer elements than required.
    ExpectedMinimumArraySizeMismatchWeak(MinimumArraySize),
    /// An array element has the wrong type.
    ExpectedArrayTypeMismatch(ArrayElementType),
    /// An array element has the wrong type.
    ExpectedArrayTypeMismatchWeak(ArrayElementType),
    /// An index lies past the end of an array.
    IndexOutOfRange(IndexRange),
    /// An index lies past the end of an array.
    IndexOutOfRangeWeak(IndexRange),
    /// An index is negative.
    NegativeIndex,
    /// An index is negative.
    NegativeIndexWeak,
    /// An index equals the array size and addresses the slot just past the end.
    IndexEqualsRange(IndexRange),
    /// An operator gives up and returns nil.
    ReturningNil,
    /// An operator gives up and returns an empty array.
    ReturningEmptyArray,
    /// A size argument is negative.
    NegativeSize,
    /// A size argument is negative.
    NegativeSizeWeak,
    /// An array would contain itself.
    ArrayRecursion,
    /// Informational output produced by a script, e.g. via `diag_log`.
    InfoMessage {
        /// Origin of the message.
        source: String,
        /// Message text.
        message: String,
    },
    /// A script tried to suspend while suspension is disabled.
    SuspensionDisabled,
    /// A script tried to suspend in an unscheduled environment.
    SuspensionInUnscheduledEnvironment,
    /// An operator gives up and returns configNull.
    ReturningConfigNull,
    /// A script assertion failed.
    AssertFailed,
    /// A range starts after it ends.
    StartIndexExceedsToIndex(IndexBounds),
    /// A range starts after it ends.
    StartIndexExceedsToIndexWeak(IndexBounds),
    /// A magic variable holds a value of the wrong type.
    MagicVariableTypeMismatch {
        /// Variable name.
        variable: String,
        /// What was expected.
        expected: ValueType,
        /// What was found.
        got: ValueType,
    },
    /// The script handle was already terminated.
    ScriptHandleAlreadyTerminated,
    /// The script handle already finished.
    ScriptHandleAlreadyFinished,
    /// An extension library was loaded.
    ExtensionLoaded {
        /// Extension name.
        extension: String,
        /// Version string reported by the extension.
        version: String,
    },
    /// An extension did not null-terminate its version string.
    ExtensionNotTerminatingVersionString {
        /// Extension name.
        extension: String,
    },
    /// An extension did not null-terminate its call output buffer.
    ExtensionNotTerminatingCallExtensionBufferString {
        /// Extension name.
        extension: String,
    },
    /// An extension did not null-terminate its argument-call output buffer.
    ExtensionNotTerminatingCallExtensionArgBufferString {
        /// Extension name.
        extension: String,
    },
    /// An extension name contains path components.
    LibraryNameContainsPath {
        /// Extension name.
        extension: String,
    },
    /// An operator gives up and returns an empty string.
    ReturningEmptyString,
    /// Calling into an extension failed.
    ExtensionRuntimeError {
        /// Extension name.
        extension: String,
        /// Error text reported by the extension.
        what: String,
    },
    /// A file could not be found.
    FileNotFound {
        /// Requested file.
        filename: String,
    },
    /// The scope already has a name.
    ScopeNameAlreadySet,
    /// The script already has a name.
    ScriptNameAlreadySet,
    /// An operator gives up and returns an empty script handle.
    ReturningEmptyScriptHandle,
    /// An operator returns an error code.
    ReturningErrorCode {
        /// Error code returned.
        error_code: String,
    },
    /// A nested array element has the wrong type.
    ExpectedSubArrayTypeMismatch(SubArrayElementType),
    /// A nested array element has the wrong type.
    ExpectedSubArrayTypeMismatchWeak(SubArrayElementType),
    /// Error output produced by a script.
    ErrorMessage {
        /// Origin of the message.
        source: String,
        /// Message text.
        message: String,
    },
    /// File system access is disabled.
    FileSystemDisabled,
    /// Networking is disabled.
    NetworkingDisabled,
    /// A network connection is already established.
    AlreadyConnected,
    /// A network address has the wrong format.
    NetworkingFormatMismatch {
        /// Address as provided.
        provided: String,
    },
    /// A network connection could not be established.
    FailedToEstablishConnection,
    /// An array is empty but elements are required.
    ExpectedArrayToHaveElements,
    /// An array is empty but elements are required.
    ExpectedArrayToHaveElementsWeak,
    /// Clipboard access is disabled.
    ClipboardDisabled,
    /// Copying to the clipboard failed.
    FailedToCopyToClipboard,
    /// A format string contains an invalid placeholder.
    FormatInvalidPlaceholder {
        /// Character following the `%`.
        placeholder: char,
        /// Offending index.
        index: usize,
    },
    /// A division by zero was attempted.
    ZeroDivisor,
    /// The named marker does not exist.
    MarkerNotExisting {
        /// Marker name.
        marker: String,
    },
    /// An operator gives up and returns a default-filled array.
    ReturningDefaultArray {
        /// Size of the returned array.
        size: usize,
    },
    /// An operator gives up and returns 0.
    ReturningScalarZero,
    /// A null value was passed where a value is required.
    ExpectedNonNullValue,
    /// A null value was passed where a value is required.
    ExpectedNonNullValueWeak,
    /// A config entry could not be found.
    ConfigEntryNotFound(ConfigEntry),
    /// A config entry could not be found.
    ConfigEntryNotFoundWeak(ConfigEntry),
    /// An object is not a vehicle.
    ExpectedVehicle,
    /// An object is not a vehicle.
    ExpectedVehicleWeak,
    /// An object is not a unit.
    ExpectedUnit,
    /// An object is not a unit.
    ExpectedUnitWeak,
    /// An operator gives up and returns false.
    ReturningFalse,
    /// A marker with this name already exists.
    MarkerAlreadyExisting {
        /// Marker name.
        marker: String,
    },
    /// A value has the wrong type.
    TypeMismatch(TypeExpectation),
    /// A value has the wrong type.
    TypeMismatchWeak(TypeExpectation),
    /// A variable is not defined in any reachable scope.
    VariableNotFound {
        /// Variable name.
        variable: String,
    },
    /// The value stack holds fewer values than an instruction needs.
    StackCorruptionMissingValues {
        /// What was expected.
        expected: usize,
        /// What was found.
        got: usize,
    },
    /// An operator has no value for its right argument.
    NoValueFoundForRightArgument,
    /// An operator has no value for its right argument.
    NoValueFoundForRightArgumentWeak,
    /// An operator has no value for its left argument.
    NoValueFoundForLeftArgument,
    /// An operator has no value for its left argument.
    NoValueFoundForLeftArgumentWeak,
    /// `left` is [`ValueType::Na`] for unary invocations.
    UnknownInputTypeCombinationBinary {
        /// Left operand type.
        left: ValueType,
        /// Operator name.
        operator: String,
        /// Right operand type.
        right: ValueType,
    },
    /// The value stack is empty.
    FoundNoValue,
    /// The named callstack has no value on its stack.
    CallstackFoundNoValue(CallstackLookup),
    /// The named callstack has no value on its stack.
    CallstackFoundNoValueWeak(CallstackLookup),
    /// A group still has members.
    GroupNotEmpty {
        /// Group name.
        group: String,
    },
    /// The loop variable of a `for` step loop has the wrong type.
    ForStepVariableTypeMismatch {
        /// Variable name.
        variable: String,
        /// What was expected.
        expected: ValueType,
        /// What was found.
        got: ValueType,
    },
    /// A `for` step loop will never run its body.
    ForStepNoWorkShouldBeDone {
        /// Loop step.
        step: f64,
        /// Start of the range.
        from: f64,
        /// End of the range.
        to: f64,
    },
    /// A marker shape name is not recognized.
    InvalidMarkerShape {
        /// Shape name as given.
        shape: String,
    },
}

impl RuntimeDiagnostic {
    /// Builds the unary form of [`UnknownInputTypeCombinationBinary`](Self::UnknownInputTypeCombinationBinary).
    pub fn unknown_input_type_combination_unary(
        operator: impl Into<String>,
        right: ValueType,
    ) -> Self {
        RuntimeDiagnostic::UnknownInputTypeCombinationBinary {
            left: ValueType::Na,
            operator: operator.into(),
            right,
        }
    }

    /// Returns the catalog kind of this payload.
    pub fn kind(&self) -> DiagnosticKind {
        use DiagnosticKind as K;
        use RuntimeDiagnostic as R;
        match self {
            R::Stacktrace { .. } => K::Stacktrace,
            R::MaximumInstructionCountReached { .. } => K::MaximumInstructionCountReached,
            R::ExpectedArraySizeMismatch(_) => K::ExpectedArraySizeMismatch,
            R::ExpectedArraySizeMismatchWeak(_) => K::ExpectedArraySizeMismatchWeak,
            R::ExpectedMinimumArraySizeMismatch(_) => K::ExpectedMinimumArraySizeMismatch,
            R::ExpectedMinimumArraySizeMismatchWeak(_) => {
                K::ExpectedMinimumArraySizeMismatchWeak
            }
            R::ExpectedArrayTypeMismatch(_) => K::ExpectedArrayTypeMismatch,
            R::ExpectedArrayTypeMismatchWeak(_) => K::ExpectedArrayTypeMismatchWeak,
            R::IndexOutOfRange(_) => K::IndexOutOfRange,
            R::IndexOutOfRangeWeak(_) => K::IndexOutOfRangeWeak,
            R::NegativeIndex => K::NegativeIndex,
            R::NegativeIndexWeak => K::NegativeIndexWeak,
            R::IndexEqualsRange(_) => K::IndexEqualsRange,
            R::ReturningNil => K::ReturningNil,
            R::ReturningEmptyArray => K::ReturningEmptyArray,
            R::NegativeSize => K::NegativeSize,
            R::NegativeSizeWeak => K::NegativeSizeWeak,
            R::ArrayRecursion => K::ArrayRecursion,
            R::InfoMessage { .. } => K::InfoMessage,
            R::SuspensionDisabled => K::SuspensionDisabled,
            R::SuspensionInUnscheduledEnvironment => K::SuspensionInUnscheduledEnvironment,
            R::ReturningConfigNull => K::ReturningConfigNull,
            R::AssertFailed => K::AssertFailed,
            R::StartIndexExceedsToIndex(_) => K::StartIndexExceedsToIndex,
            R::StartIndexExceedsToIndexWeak(_) => K::StartIndexExceedsToIndexWeak,
            R::MagicVariableTypeMismatch { .. } => K::MagicVariableTypeMismatch,
            R::ScriptHandleAlreadyTerminated => K::ScriptHandleAlreadyTerminated,
            R::ScriptHandleAlreadyFinished => K::ScriptHandleAlreadyFinished,
            R::ExtensionLoaded { .. } => K::ExtensionLoaded,
            R::ExtensionNotTerminatingVersionString { .. } => {
                K::ExtensionNotTerminatingVersionString
            }
            R::ExtensionNotTerminatingCallExtensionBufferString { .. } => {
                K::ExtensionNotTerminatingCallExtensionBufferString
            }
            R::ExtensionNotTerminatingCallExtensionArgBufferString { .. } => {
                K::ExtensionNotTerminatingCallExtensionArgBufferString
            }
            R::LibraryNameContainsPath { .. } => K::LibraryNameContainsPath,
            R::ReturningEmptyString => K::ReturningEmptyString,
            R::ExtensionRuntimeError { .. } => K::ExtensionRuntimeError,
            R::FileNotFound { .. } => K::FileNotFound,
            R::ScopeNameAlreadySet => K::ScopeNameAlreadySet,
            R::ScriptNameAlreadySet => K::ScriptNameAlreadySet,
            R::ReturningEmptyScriptHandle => K::ReturningEmptyScriptHandle,
            R::ReturningErrorCode { .. } => K::ReturningErrorCode,
            R::ExpectedSubArrayTypeMismatch(_) => K::ExpectedSubArrayTypeMismatch,
            R::ExpectedSubArrayTypeMismatchWeak(_) => K::ExpectedSubArrayTypeMismatchWeak,
            R::ErrorMessage { .. } => K::ErrorMessage,
            R::FileSystemDisabled => K::FileSystemDisabled,
            R::NetworkingDisabled => K::NetworkingDisabled,
            R::AlreadyConnected => K::AlreadyConnected,
            R::NetworkingFormatMismatch { .. } => K::NetworkingFormatMismatch,
            R::FailedToEstablishConnection => K::FailedToEstablishConnection,
            R::ExpectedArrayToHaveElements => K::ExpectedArrayToHaveElements,
            R::ExpectedArrayToHaveElementsWeak => K::ExpectedArrayToHaveElementsWeak,
            R::ClipboardDisabled => K::ClipboardDisabled,
            R::FailedToCopyToClipboard => K::FailedToCopyToClipboard,
            R::FormatInvalidPlaceholder { .. } => K::FormatInvalidPlaceholder,
            R::ZeroDivisor => K::ZeroDivisor,
            R::MarkerNotExisting { .. } => K::MarkerNotExisting,
            R::ReturningDefaultArray { .. } => K::ReturningDefaultArray,
            R::ReturningScalarZero => K::ReturningScalarZero,
            R::ExpectedNonNullValue => K::ExpectedNonNullValue,
            R::ExpectedNonNullValueWeak => K::ExpectedNonNullValueWeak,
            R::ConfigEntryNotFound(_) => K::ConfigEntryNotFound,
            R::ConfigEntryNotFoundWeak(_) => K::ConfigEntryNotFoundWeak,
            R::ExpectedVehicle => K::ExpectedVehicle,
            R::ExpectedVehicleWeak => K::ExpectedVehicleWeak,
            R::ExpectedUnit => K::ExpectedUnit,
            R::ExpectedUnitWeak => K::ExpectedUnitWeak,
            R::ReturningFalse => K::ReturningFalse,
            R::MarkerAlreadyExisting { .. } => K::MarkerAlreadyExisting,
            R::TypeMismatch(_) => K::TypeMismatch,
            R::TypeMismatchWeak(_) => K::TypeMismatchWeak,
            R::VariableNotFound { .. } => K::VariableNotFound,
            R::StackCorruptionMissingValues { .. } => K::StackCorruptionMissingValues,
            R::NoValueFoundForRightArgument => K::NoValueFoundForRightArgument,
            R::NoValueFoundForRightArgumentWeak => K::NoValueFoundForRightArgumentWeak,
            R::NoValueFoundForLeftArgument => K::NoValueFoundForLeftArgument,
            R::NoValueFoundForLeftArgumentWeak => K::NoValueFoundForLeftArgumentWeak,
            R::UnknownInputTypeCombinationBinary { .. } => K::UnknownInputTypeCombinationBinary,
            R::FoundNoValue => K::FoundNoValue,
            R::CallstackFoundNoValue(_) => K::CallstackFoundNoValue,
            R::CallstackFoundNoValueWeak(_) => K::CallstackFoundNoValueWeak,
            R::GroupNotEmpty { .. } => K::GroupNotEmpty,
            R::ForStepVariableTypeMismatch { .. } => K::ForStepVariableTypeMismatch,
            R::ForStepNoWorkShouldBeDone { .. } => K::ForStepNoWorkShouldBeDone,
            R::InvalidMarkerShape { .. } => K::InvalidMarkerShape,
        }
    }
}

impl fmt::Display for RuntimeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use RuntimeDiagnostic as R;
        match self {
            R::Stacktrace { stacktrace } => write!(f, "Stacktrace:\n{stacktrace}"),
            R::MaximumInstructionCountReached { maximum } => {
                write!(f, "Maximum instruction count of {maximum} reached.")
            }
            R::ExpectedArraySizeMismatch(size) | R::ExpectedArraySizeMismatchWeak(size) => {
                write!(f, "Array size mismatch: {size}.")
            }
            R::ExpectedMinimumArraySizeMismatch(size)
            | R::ExpectedMinimumArraySizeMismatchWeak(size) => write!(
                f,
                "Array too small: expected at least {} elements, got {}.",
                size.expected, size.got
            ),
            R::ExpectedArrayTypeMismatch(element) | R::ExpectedArrayTypeMismatchWeak(element) => {
                write!(
                    f,
                    "Array element {} has the wrong type: expected {}, got {}.",
                    element.position,
                    OneOf(&element.expected),
                    element.got
                )
            }
            R::IndexOutOfRange(at) | R::IndexOutOfRangeWeak(at) => write!(
                f,
                "Index {} is out of range for array of size {}.",
                at.index, at.range
            ),
            R::NegativeIndex | R::NegativeIndexWeak => f.write_str("Index is negative."),
            R::IndexEqualsRange(at) => write!(
                f,
                "Index {} equals the array size {} and points just past the end.",
                at.index, at.range
            ),
            R::ReturningNil => f.write_str("Returning nil."),
            R::ReturningEmptyArray => f.write_str("Returning empty array."),
            R::NegativeSize | R::NegativeSizeWeak => f.write_str("Size is negative."),
            R::ArrayRecursion => f.write_str("Array would contain itself."),
            R::InfoMessage { source, message } | R::ErrorMessage { source, message } => {
                write!(f, "[{source}] {message}")
            }
            R::SuspensionDisabled => f.write_str("Suspension is disabled."),
            R::SuspensionInUnscheduledEnvironment => {
                f.write_str("Cannot suspend in an unscheduled environment.")
            }
            R::ReturningConfigNull => f.write_str("Returning configNull."),
            R::AssertFailed => f.write_str("Assertion failed."),
            R::StartIndexExceedsToIndex(bounds)
            | R::StartIndexExceedsToIndexWeak(bounds) => write!(
                f,
                "Start index {} exceeds end index {}.",
                bounds.from, bounds.to
            ),
            R::MagicVariableTypeMismatch {
                variable,
                expected,
                got,
            } => write!(
                f,
                "Magic variable '{variable}' has the wrong type: expected {expected}, got {got}."
            ),
            R::ScriptHandleAlreadyTerminated => f.write_str("Script handle already terminated."),
            R::ScriptHandleAlreadyFinished => f.write_str("Script handle already finished."),
            R::ExtensionLoaded { extension, version } => {
                write!(f, "Extension '{extension}' loaded (version '{version}').")
            }
            R::ExtensionNotTerminatingVersionString { extension } => write!(
                f,
                "Extension '{extension}' did not null-terminate its version string."
            ),
            R::ExtensionNotTerminatingCallExtensionBufferString { extension } => write!(
                f,
                "Extension '{extension}' did not null-terminate its output buffer."
            ),
            R::ExtensionNotTerminatingCallExtensionArgBufferString { extension } => write!(
                f,
                "Extension '{extension}' did not null-terminate its output buffer for an argument call."
            ),
            R::LibraryNameContainsPath { extension } => write!(
                f,
                "Extension name '{extension}' contains a path. Only the library name is allowed."
            ),
            R::ReturningEmptyString => f.write_str("Returning empty string."),
            R::ExtensionRuntimeError { extension, what } => {
                write!(f, "Extension '{extension}' failed: {what}")
            }
            R::FileNotFound { filename } => write!(f, "File '{filename}' not found."),
            R::ScopeNameAlreadySet => f.write_str("Scope name is already set."),
            R::ScriptNameAlreadySet => f.write_str("Script name is already set."),
            R::ReturningEmptyScriptHandle => f.write_str("Returning empty script handle."),
            R::ReturningErrorCode { error_code } => {
                write!(f, "Returning error code '{error_code}'.")
            }
            R::ExpectedSubArrayTypeMismatch(element)
            | R::ExpectedSubArrayTypeMismatchWeak(element) => write!(
                f,
                "Array element {} has the wrong type: expected {}, got {}.",
                IndexPath(&element.positions),
                OneOf(&element.expected),
                element.got
            ),
            R::FileSystemDisabled => f.write_str("File system access is disabled."),
            R::NetworkingDisabled => f.write_str("Networking is disabled."),
            R::AlreadyConnected => f.write_str("Already connected."),
            R::NetworkingFormatMismatch { provided } => write!(
                f,
                "Invalid network address '{provided}': expected 'host:port'."
            ),
            R::FailedToEstablishConnection => f.write_str("Failed to establish connection."),
            R::ExpectedArrayToHaveElements | R::ExpectedArrayToHaveElementsWeak => {
                f.write_str("Expected array to have elements.")
            }
            R::ClipboardDisabled => f.write_str("Clipboard access is disabled."),
            R::FailedToCopyToClipboard => f.write_str("Failed to copy to clipboard."),
            R::FormatInvalidPlaceholder { placeholder, index } => write!(
                f,
                "Invalid format placeholder '%{placeholder}' at index {index}."
            ),
            R::ZeroDivisor => f.write_str("Division by zero."),
            R::MarkerNotExisting { marker } => write!(f, "Marker '{marker}' does not exist."),
            R::ReturningDefaultArray { size } => {
                write!(f, "Returning default array of size {size}.")
            }
            R::ReturningScalarZero => f.write_str("Returning 0."),
            R::ExpectedNonNullValue | R::ExpectedNonNullValueWeak => {
                f.write_str("Expected non-null value.")
            }
            R::ConfigEntryNotFound(entry) | R::ConfigEntryNotFoundWeak(entry) => write!(
                f,
                "Config entry '{}' not found in '{}'.",
                entry.name,
                ConfigPath(&entry.path)
            ),
            R::ExpectedVehicle | R::ExpectedVehicleWeak => {
                f.write_str("Expected object to be a vehicle.")
            }
            R::ExpectedUnit | R::ExpectedUnitWeak => f.write_str("Expected object to be a unit."),
            R::ReturningFalse => f.write_str("Returning false."),
            R::MarkerAlreadyExisting { marker } => {
                write!(f, "Marker '{marker}' already exists.")
            }
            R::TypeMismatch(types) | R::TypeMismatchWeak(types) => write!(
                f,
                "Type mismatch: expected {}, got {}.",
                types.expected, types.got
            ),
            R::VariableNotFound { variable } => write!(f, "Variable '{variable}' not found."),
            R::StackCorruptionMissingValues { expected, got } => write!(
                f,
                "Stack corruption: expected {expected} values, got {got}."
            ),
            R::NoValueFoundForRightArgument | R::NoValueFoundForRightArgumentWeak => {
                f.write_str("No value found for right argument.")
            }
            R::NoValueFoundForLeftArgument | R::NoValueFoundForLeftArgumentWeak => {
                f.write_str("No value found for left argument.")
            }
            R::UnknownInputTypeCombinationBinary {
                left,
                operator,
                right,
            } => {
                if left.is_na() {
                    write!(f, "Unknown input type combination: {operator} {right}.")
                } else {
                    write!(
                        f,
                        "Unknown input type combination: {left} {operator} {right}."
                    )
                }
            }
            R::FoundNoValue => f.write_str("Found no value on the stack."),
            R::CallstackFoundNoValue(lookup) | R::CallstackFoundNoValueWeak(lookup) => {
                write!(f, "Callstack '{}' found no value.", lookup.callstack)
            }
            R::GroupNotEmpty { group } => write!(f, "Group '{group}' is not empty."),
            R::ForStepVariableTypeMismatch {
                variable,
                expected,
                got,
            } => write!(
                f,
                "Loop variable '{variable}' has the wrong type: expected {expected}, got {got}."
            ),
            R::ForStepNoWorkShouldBeDone { step, from, to } => write!(
                f,
                "Loop from {from} to {to} with step {step} will never run."
            ),
            R::InvalidMarkerShape { shape } => write!(f, "Invalid marker shape '{shape}'."),
        }
    }
}
