//! The catalog of diagnostic kinds with their fixed codes and severities.

use crate::code::{DiagnosticCode, Domain};
use crate::severity::Severity;
use std::fmt;

/// Every diagnostic the toolchain can raise, without payload.
///
/// The discriminant of each kind is its public numeric code, so two kinds can
/// never share a code. Severity and domain are fixed per kind. Kinds whose
/// names end in `Weak` are warning-level twins of an error-level kind that
/// reports the same fact; see [`twin`](DiagnosticKind::twin).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u32)]
pub enum DiagnosticKind {
    // preprocessor
    /// A macro was invoked with a different number of arguments than it declares.
    ArgCountMismatch = 10001,
    /// Text follows the path of an `#include` directive.
    UnexpectedDataAfterInclude = 10002,
    /// A file includes itself, directly or through other includes.
    RecursiveInclude = 10003,
    /// An `#include` directive could not be resolved or read.
    IncludeFailed = 10004,
    /// A macro is defined again without being undefined first.
    MacroDefinedTwice = 10005,
    /// `#undef` or `#ifdef` names a macro that is not defined.
    MacroNotFound = 10006,
    /// `#ifdef` appears while another conditional block is still open.
    UnexpectedIfdef = 10007,
    /// `#ifndef` appears while another conditional block is still open.
    UnexpectedIfndef = 10008,
    /// `#else` appears outside of a conditional block.
    UnexpectedElse = 10009,
    /// `#endif` appears outside of a conditional block.
    UnexpectedEndif = 10010,
    /// A conditional block is not closed before the end of the file.
    MissingEndif = 10011,
    /// An unknown preprocessor directive was found.
    UnknownInstruction = 10012,
    /// A macro argument is empty.
    EmptyArgument = 10013,

    // assembly
    /// An assembly statement is not terminated by `;`.
    ExpectedSemicolon = 20001,
    /// No instruction form matches the assembly input.
    NoViableAlternativeInstructions = 20002,
    /// No argument form matches the assembly input.
    NoViableAlternativeArg = 20003,
    /// An `endStatement` instruction was expected.
    ExpectedEndStatement = 20004,
    /// A `callNular` instruction was expected.
    ExpectedCallNular = 20005,
    /// A nular operator name was expected.
    ExpectedNularOperator = 20006,
    /// The named nular operator does not exist.
    UnknownNularOperator = 20007,
    /// A `callUnary` instruction was expected.
    ExpectedCallUnary = 20008,
    /// A unary operator name was expected.
    ExpectedUnaryOperator = 20009,
    /// The named unary operator does not exist.
    UnknownUnaryOperator = 20010,
    /// A `callBinary` instruction was expected.
    ExpectedCallBinary = 20011,
    /// A binary operator name was expected.
    ExpectedBinaryOperator = 20012,
    /// The named binary operator does not exist.
    UnknownBinaryOperator = 20013,
    /// An `assignTo` instruction was expected.
    ExpectedAssignTo = 20014,
    /// A variable name was expected.
    ExpectedVariableName = 20015,
    /// An `assignToLocal` instruction was expected.
    ExpectedAssignToLocal = 20016,
    /// A `getVariable` instruction was expected.
    ExpectedGetVariable = 20017,
    /// A `makeArray` instruction was expected.
    ExpectedMakeArray = 20018,
    /// An integer literal was expected.
    ExpectedInteger = 20019,
    /// A `push` instruction was expected.
    ExpectedPush = 20020,
    /// A type name was expected.
    ExpectedTypeName = 20021,
    /// A numeric literal does not fit its target type.
    NumberOutOfRange = 20022,

    // parser
    /// A statement is not terminated by `;` or `,`.
    ExpectedStatementTerminator = 30001,
    /// No statement form matches the input.
    NoViableAlternativeStatement = 30002,
    /// A `private` variable name does not start with `_`.
    MissingUnderscoreOnPrivateVariable = 30003,
    /// A binary expression was expected.
    ExpectedBinaryExpression = 30004,
    /// A binary operator has no right-hand side.
    MissingRightArgument = 30005,
    /// A `(` is never closed.
    MissingRoundClosingBracket = 30006,
    /// A `{` is never closed.
    MissingCurlyClosingBracket = 30007,
    /// A `[` is never closed.
    MissingSquareClosingBracket = 30008,
    /// No primary expression form matches the input.
    NoViableAlternativePrimaryExpression = 30009,
    /// A number literal has no digits.
    EmptyNumber = 30010,
    /// Script code was expected.
    ExpectedSqf = 30011,
    /// The input ended unexpectedly.
    EndOfFile = 30012,

    // config
    /// A config statement is not terminated by `;`.
    ConfigExpectedStatementTerminator = 40001,
    /// No config node form matches the input.
    ConfigNoViableAlternativeNode = 40002,
    /// An identifier was expected.
    ConfigExpectedIdentifier = 40003,
    /// A `(` is never closed.
    ConfigMissingRoundClosingBracket = 40004,
    /// A class body is missing its `{`.
    ConfigMissingCurlyOpeningBracket = 40005,
    /// A `{` is never closed.
    ConfigMissingCurlyClosingBracket = 40006,
    /// A `[` is never closed.
    ConfigMissingSquareClosingBracket = 40007,
    /// A value assignment is missing its `=`.
    ConfigMissingEqualSign = 40008,
    /// An array value was expected.
    ConfigExpectedArray = 40009,
    /// A value was expected.
    ConfigExpectedValue = 40010,
    /// No value form matches the input.
    ConfigNoViableAlternativeValue = 40011,
    /// Parsing stopped before the end of the input.
    ConfigEndOfFileNotReached = 40012,

    // linting
    /// A variable is read before anything was assigned to it.
    UnassignedVariable = 50001,

    // runtime
    /// The VM aborted; carries the rendered call stack.
    Stacktrace = 60001,
    /// The VM executed more instructions than it is allowed to.
    MaximumInstructionCountReached = 60002,
    /// An array has the wrong number of elements.
    ExpectedArraySizeMismatch = 60003,
    /// An array has the wrong number of elements.
    ExpectedArraySizeMismatchWeak = 60004,
    /// An array has fewer elements than required.
    ExpectedMinimumArraySizeMismatch = 60005,
    /// An array has fewer elements than required.
    ExpectedMinimumArraySizeMismatchWeak = 60006,
    /// An array element has the wrong type.
    ExpectedArrayTypeMismatch = 60007,
    /// An array element has the wrong type.
    ExpectedArrayTypeMismatchWeak = 60008,
    /// An index lies past the end of an array.
    IndexOutOfRange = 60009,
    /// An index lies past the end of an array.
    IndexOutOfRangeWeak = 60010,
    /// An index is negative.
    NegativeIndex = 60011,
    /// An index is negative.
    NegativeIndexWeak = 60012,
    /// An index equals the array size and addresses the slot just past the end.
    IndexEqualsRange = 60013,
    /// An operator gives up and returns nil.
    ReturningNil = 60014,
    /// An operator gives up and returns an empty array.
    ReturningEmptyArray = 60015,
    /// A size argument is negative.
    NegativeSize = 60016,
    /// A size argument is negative.
    NegativeSizeWeak = 60017,
    /// An array would contain itself.
    ArrayRecursion = 60018,
    /// Informational output produced by a script.
    InfoMessage = 60019,
    /// A script tried to suspend while suspension is disabled.
    SuspensionDisabled = 60020,
    /// A script tried to suspend in an unscheduled environment.
    SuspensionInUnscheduledEnvironment = 60021,
    /// An operator gives up and returns configNull.
    ReturningConfigNull = 60022,
    /// A script assertion failed.
    AssertFailed = 60023,
    /// A range starts after it ends.
    StartIndexExceedsToIndex = 60024,
    /// A range starts after it ends.
    StartIndexExceedsToIndexWeak = 60025,
    /// A magic variable holds a value of the wrong type.
    MagicVariableTypeMismatch = 60026,
    /// The script handle was already terminated.
    ScriptHandleAlreadyTerminated = 60027,
    /// The script handle already finished.
    ScriptHandleAlreadyFinished = 60028,
    /// An extension library was loaded.
    ExtensionLoaded = 60029,
    /// An extension did not null-terminate its version string.
    ExtensionNotTerminatingVersionString = 60030,
    /// An extension did not null-terminate its call output buffer.
    ExtensionNotTerminatingCallExtensionBufferString = 60031,
    /// An extension did not null-terminate its argument-call output buffer.
    ExtensionNotTerminatingCallExtensionArgBufferString = 60032,
    /// An extension name contains path components.
    LibraryNameContainsPath = 60033,
    /// An operator gives up and returns an empty string.
    ReturningEmptyString = 60034,
    /// Calling into an extension failed.
    ExtensionRuntimeError = 60035,
    /// A file could not be found.
    FileNotFound = 60036,
    /// The scope already has a name.
    ScopeNameAlreadySet = 60037,
    /// The script already has a name.
    ScriptNameAlreadySet = 60038,
    /// An operator gives up and returns an empty script handle.
    ReturningEmptyScriptHandle = 60039,
    /// An operator returns an error code.
    ReturningErrorCode = 60040,
    /// A nested array element has the wrong type.
    ExpectedSubArrayTypeMismatch = 60041,
    /// A nested array element has the wrong type.
    ExpectedSubArrayTypeMismatchWeak = 60042,
    /// Error output produced by a script.
    ErrorMessage = 60043,
    /// File system access is disabled.
    FileSystemDisabled = 60044,
    /// Networking is disabled.
    NetworkingDisabled = 60045,
    /// A network connection is already established.
    AlreadyConnected = 60046,
    /// A network address has the wrong format.
    NetworkingFormatMismatch = 60047,
    /// A network connection could not be established.
    FailedToEstablishConnection = 60048,
    /// An array is empty but elements are required.
    ExpectedArrayToHaveElements = 60049,
    /// An array is empty but elements are required.
    ExpectedArrayToHaveElementsWeak = 60050,
    /// Clipboard access is disabled.
    ClipboardDisabled = 60051,
    /// Copying to the clipboard failed.
    FailedToCopyToClipboard = 60052,
    /// A format string contains an invalid placeholder.
    FormatInvalidPlaceholder = 60053,
    /// A division by zero was attempted.
    ZeroDivisor = 60054,
    /// The named marker does not exist.
    MarkerNotExisting = 60055,
    /// An operator gives up and returns a default-filled array.
    ReturningDefaultArray = 60056,
    /// An operator gives up and returns 0.
    ReturningScalarZero = 60057,
    /// A null value was passed where a value is required.
    ExpectedNonNullValue = 60058,
    /// A null value was passed where a value is required.
    ExpectedNonNullValueWeak = 60059,
    /// A config entry could not be found.
    ConfigEntryNotFound = 60060,
    /// A config entry could not be found.
    ConfigEntryNotFoundWeak = 60061,
    /// An object is not a vehicle.
    ExpectedVehicle = 60062,
    /// An object is not a vehicle.
    ExpectedVehicleWeak = 60063,
    /// An object is not a unit.
    ExpectedUnit = 60064,
    /// An object is not a unit.
    ExpectedUnitWeak = 60065,
    /// An operator gives up and returns false.
    ReturningFalse = 60066,
    /// A marker with this name already exists.
    MarkerAlreadyExisting = 60067,
    /// A value has the wrong type.
    TypeMismatch = 60068,
    /// A value has the wrong type.
    TypeMismatchWeak = 60069,
    /// A variable is not defined in any reachable scope.
    VariableNotFound = 60070,
    /// The value stack holds fewer values than an instruction needs.
    StackCorruptionMissingValues = 60071,
    /// An operator has no value for its right argument.
    NoValueFoundForRightArgument = 60072,
    /// An operator has no value for its right argument.
    NoValueFoundForRightArgumentWeak = 60073,
    /// An operator has no value for its left argument.
    NoValueFoundForLeftArgument = 60074,
    /// An operator has no value for its left argument.
    NoValueFoundForLeftArgumentWeak = 60075,
    /// No operator overload accepts the given operand types.
    UnknownInputTypeCombinationBinary = 60076,
    /// The value stack is empty.
    FoundNoValue = 60077,
    /// The named callstack has no value on its stack.
    CallstackFoundNoValue = 60078,
    /// The named callstack has no value on its stack.
    CallstackFoundNoValueWeak = 60079,
    /// A group still has members.
    GroupNotEmpty = 60080,
    /// The loop variable of a `for` step loop has the wrong type.
    ForStepVariableTypeMismatch = 60081,
    /// A `for` step loop will never run its body.
    ForStepNoWorkShouldBeDone = 60082,
    /// A marker shape name is not recognized.
    InvalidMarkerShape = 60083,
}

impl DiagnosticKind {
    /// Every kind, in code order.
    pub const ALL: [DiagnosticKind; 143] = [
        DiagnosticKind::ArgCountMismatch,
        DiagnosticKind::UnexpectedDataAfterInclude,
        DiagnosticKind::RecursiveInclude,
        DiagnosticKind::IncludeFailed,
        DiagnosticKind::MacroDefinedTwice,
        DiagnosticKind::MacroNotFound,
        DiagnosticKind::UnexpectedIfdef,
        DiagnosticKind::UnexpectedIfndef,
        DiagnosticKind::UnexpectedElse,
        DiagnosticKind::UnexpectedEndif,
        DiagnosticKind::MissingEndif,
        DiagnosticKind::UnknownInstruction,
        DiagnosticKind::EmptyArgument,
        DiagnosticKind::ExpectedSemicolon,
        DiagnosticKind::NoViableAlternativeInstructions,
        DiagnosticKind::NoViableAlternativeArg,
        DiagnosticKind::ExpectedEndStatement,
        DiagnosticKind::ExpectedCallNular,
        DiagnosticKind::ExpectedNularOperator,
        DiagnosticKind::UnknownNularOperator,
        DiagnosticKind::ExpectedCallUnary,
        DiagnosticKind::ExpectedUnaryOperator,
        DiagnosticKind::UnknownUnaryOperator,
        DiagnosticKind::ExpectedCallBinary,
        DiagnosticKind::ExpectedBinaryOperator,
        DiagnosticKind::UnknownBinaryOperator,
        DiagnosticKind::ExpectedAssignTo,
        DiagnosticKind::ExpectedVariableName,
        DiagnosticKind::ExpectedAssignToLocal,
        DiagnosticKind::ExpectedGetVariable,
        DiagnosticKind::ExpectedMakeArray,
        DiagnosticKind::ExpectedInteger,
        DiagnosticKind::ExpectedPush,
        DiagnosticKind::ExpectedTypeName,
        DiagnosticKind::NumberOutOfRange,
        DiagnosticKind::ExpectedStatementTerminator,
        DiagnosticKind::NoViableAlternativeStatement,
        DiagnosticKind::MissingUnderscoreOnPrivateVariable,
        DiagnosticKind::ExpectedBinaryExpression,
        DiagnosticKind::MissingRightArgument,
        DiagnosticKind::MissingRoundClosingBracket,
        DiagnosticKind::MissingCurlyClosingBracket,
        DiagnosticKind::MissingSquareClosingBracket,
        DiagnosticKind::NoViableAlternativePrimaryExpression,
        DiagnosticKind::EmptyNumber,
        DiagnosticKind::ExpectedSqf,
        DiagnosticKind::EndOfFile,
        DiagnosticKind::ConfigExpectedStatementTerminator,
        DiagnosticKind::ConfigNoViableAlternativeNode,
        DiagnosticKind::ConfigExpectedIdentifier,
        DiagnosticKind::ConfigMissingRoundClosingBracket,
        DiagnosticKind::ConfigMissingCurlyOpeningBracket,
        DiagnosticKind::ConfigMissingCurlyClosingBracket,
        DiagnosticKind::ConfigMissingSquareClosingBracket,
        DiagnosticKind::ConfigMissingEqualSign,
        DiagnosticKind::ConfigExpectedArray,
        DiagnosticKind::ConfigExpectedValue,
        DiagnosticKind::ConfigNoViableAlternativeValue,
        DiagnosticKind::ConfigEndOfFileNotReached,
        DiagnosticKind::UnassignedVariable,
        DiagnosticKind::Stacktrace,
        DiagnosticKind::MaximumInstructionCountReached,
        DiagnosticKind::ExpectedArraySizeMismatch,
        DiagnosticKind::ExpectedArraySizeMismatchWeak,
        DiagnosticKind::ExpectedMinimumArraySizeMismatch,
        DiagnosticKind::ExpectedMinimumArraySizeMismatchWeak,
        DiagnosticKind::ExpectedArrayTypeMismatch,
        DiagnosticKind::ExpectedArrayTypeMismatchWeak,
        DiagnosticKind::IndexOutOfRange,
        DiagnosticKind::IndexOutOfRangeWeak,
        DiagnosticKind::NegativeIndex,
        DiagnosticKind::NegativeIndexWeak,
        DiagnosticKind::IndexEqualsRange,
        DiagnosticKind::ReturningNil,
        DiagnosticKind::ReturningEmptyArray,
        DiagnosticKind::NegativeSize,
        DiagnosticKind::NegativeSizeWeak,
        DiagnosticKind::ArrayRecursion,
        DiagnosticKind::InfoMessage,
        DiagnosticKind::SuspensionDisabled,
        DiagnosticKind::SuspensionInUnscheduledEnvironment,
        DiagnosticKind::ReturningConfigNull,
        DiagnosticKind::AssertFailed,
        DiagnosticKind::StartIndexExceedsToIndex,
        DiagnosticKind::StartIndexExceedsToIndexWeak,
        DiagnosticKind::MagicVariableTypeMismatch,
        DiagnosticKind::ScriptHandleAlreadyTerminated,
        DiagnosticKind::ScriptHandleAlreadyFinished,
        DiagnosticKind::ExtensionLoaded,
        DiagnosticKind::ExtensionNotTerminatingVersionString,
        DiagnosticKind::ExtensionNotTerminatingCallExtensionBufferString,
        DiagnosticKind::ExtensionNotTerminatingCallExtensionArgBufferString,
        DiagnosticKind::LibraryNameContainsPath,
        DiagnosticKind::ReturningEmptyString,
        DiagnosticKind::ExtensionRuntimeError,
        DiagnosticKind::FileNotFound,
        DiagnosticKind::ScopeNameAlreadySet,
        DiagnosticKind::ScriptNameAlreadySet,
        DiagnosticKind::ReturningEmptyScriptHandle,
        DiagnosticKind::ReturningErrorCode,
        DiagnosticKind::ExpectedSubArrayTypeMismatch,
        DiagnosticKind::ExpectedSubArrayTypeMismatchWeak,
        DiagnosticKind::ErrorMessage,
        DiagnosticKind::FileSystemDisabled,
        DiagnosticKind::NetworkingDisabled,
        DiagnosticKind::AlreadyConnected,
        DiagnosticKind::NetworkingFormatMismatch,
        DiagnosticKind::FailedToEstablishConnection,
        DiagnosticKind::ExpectedArrayToHaveElements,
        DiagnosticKind::ExpectedArrayToHaveElementsWeak,
        DiagnosticKind::ClipboardDisabled,
        DiagnosticKind::FailedToCopyToClipboard,
        DiagnosticKind::FormatInvalidPlaceholder,
        DiagnosticKind::ZeroDivisor,
        DiagnosticKind::MarkerNotExisting,
        DiagnosticKind::ReturningDefaultArray,
        DiagnosticKind::ReturningScalarZero,
        DiagnosticKind::ExpectedNonNullValue,
        DiagnosticKind::ExpectedNonNullValueWeak,
        DiagnosticKind::ConfigEntryNotFound,
        DiagnosticKind::ConfigEntryNotFoundWeak,
        DiagnosticKind::ExpectedVehicle,
        DiagnosticKind::ExpectedVehicleWeak,
        DiagnosticKind::ExpectedUnit,
        DiagnosticKind::ExpectedUnitWeak,
        DiagnosticKind::ReturningFalse,
        DiagnosticKind::MarkerAlreadyExisting,
        DiagnosticKind::TypeMismatch,
        DiagnosticKind::TypeMismatchWeak,
        DiagnosticKind::VariableNotFound,
        DiagnosticKind::StackCorruptionMissingValues,
        DiagnosticKind::NoValueFoundForRightArgument,
        DiagnosticKind::NoValueFoundForRightArgumentWeak,
        DiagnosticKind::NoValueFoundForLeftArgument,
        DiagnosticKind::NoValueFoundForLeftArgumentWeak,
        DiagnosticKind::UnknownInputTypeCombinationBinary,
        DiagnosticKind::FoundNoValue,
        DiagnosticKind::CallstackFoundNoValue,
        DiagnosticKind::CallstackFoundNoValueWeak,
        DiagnosticKind::GroupNotEmpty,
        DiagnosticKind::ForStepVariableTypeMismatch,
        DiagnosticKind::ForStepNoWorkShouldBeDone,
        DiagnosticKind::InvalidMarkerShape,
    ];

    /// Returns the stable numeric code of this kind.
    pub fn code(self) -> DiagnosticCode {
        DiagnosticCode::new(self as u32)
    }

    /// Looks up the kind carrying `code`.
    pub fn from_code(code: u32) -> Option<DiagnosticKind> {
        DiagnosticKind::ALL.into_iter().find(|k| *k as u32 == code)
    }

    /// Returns the toolchain stage owning this kind.
    pub fn domain(self) -> Domain {
        match self as u32 / 10_000 {
            1 => Domain::Preprocessor,
            2 => Domain::Assembly,
            3 => Domain::Parser,
            4 => Domain::Config,
            5 => Domain::Linting,
            _ => Domain::Runtime,
        }
    }

    /// Returns the fixed severity of this kind.
    pub fn severity(self) -> Severity {
        use DiagnosticKind::*;
        match self {
            Stacktrace
            | MaximumInstructionCountReached => Severity::Fatal,
            ArgCountMismatch
            | RecursiveInclude
            | IncludeFailed
            | UnexpectedIfdef
            | UnexpectedIfndef
            | UnexpectedElse
            | UnexpectedEndif
            | MissingEndif
            | UnknownInstruction
            | ExpectedSemicolon
            | NoViableAlternativeInstructions
            | NoViableAlternativeArg
            | ExpectedEndStatement
            | ExpectedCallNular
            | ExpectedNularOperator
            | UnknownNularOperator
            | ExpectedCallUnary
            | ExpectedUnaryOperator
            | UnknownUnaryOperator
            | ExpectedCallBinary
            | ExpectedBinaryOperator
            | UnknownBinaryOperator
            | ExpectedAssignTo
            | ExpectedVariableName
            | ExpectedAssignToLocal
            | ExpectedGetVariable
            | ExpectedMakeArray
            | ExpectedInteger
            | ExpectedPush
            | ExpectedTypeName
            | ExpectedStatementTerminator
            | NoViableAlternativeStatement
            | MissingUnderscoreOnPrivateVariable
            | ExpectedBinaryExpression
            | MissingRightArgument
            | MissingRoundClosingBracket
            | MissingCurlyClosingBracket
            | MissingSquareClosingBracket
            | NoViableAlternativePrimaryExpression
            | EmptyNumber
            | ExpectedSqf
            | EndOfFile
            | ConfigExpectedStatementTerminator
            | ConfigNoViableAlternativeNode
            | ConfigExpectedIdentifier
            | ConfigMissingRoundClosingBracket
            | ConfigMissingCurlyOpeningBracket
            | ConfigMissingCurlyClosingBracket
            | ConfigMissingSquareClosingBracket
            | ConfigMissingEqualSign
            | ConfigExpectedArray
            | ConfigExpectedValue
            | ConfigNoViableAlternativeValue
            | ConfigEndOfFileNotReached
            | ExpectedArraySizeMismatch
            | ExpectedMinimumArraySizeMismatch
            | ExpectedArrayTypeMismatch
            | IndexOutOfRange
            | NegativeIndex
            | NegativeSize
            | ArrayRecursion
            | SuspensionDisabled
            | SuspensionInUnscheduledEnvironment
            | AssertFailed
            | StartIndexExceedsToIndex
            | MagicVariableTypeMismatch
            | ScopeNameAlreadySet
            | ExpectedSubArrayTypeMismatch
            | ErrorMessage
            | AlreadyConnected
            | NetworkingFormatMismatch
            | ExpectedArrayToHaveElements
            | ExpectedNonNullValue
            | ConfigEntryNotFound
            | ExpectedVehicle
            | ExpectedUnit
            | TypeMismatch
            | StackCorruptionMissingValues
            | NoValueFoundForRightArgument
            | NoValueFoundForLeftArgument
            | UnknownInputTypeCombinationBinary
            | FoundNoValue
            | CallstackFoundNoValue => Severity::Error,
            UnexpectedDataAfterInclude
            | MacroDefinedTwice
            | MacroNotFound
            | EmptyArgument
            | NumberOutOfRange
            | UnassignedVariable
            | ExpectedArraySizeMismatchWeak
            | ExpectedMinimumArraySizeMismatchWeak
            | ExpectedArrayTypeMismatchWeak
            | IndexOutOfRangeWeak
            | NegativeIndexWeak
            | IndexEqualsRange
            | NegativeSizeWeak
            | StartIndexExceedsToIndexWeak
            | ScriptHandleAlreadyTerminated
            | ScriptHandleAlreadyFinished
            | ExtensionNotTerminatingVersionString
            | ExtensionNotTerminatingCallExtensionBufferString
            | ExtensionNotTerminatingCallExtensionArgBufferString
            | LibraryNameContainsPath
            | ExtensionRuntimeError
            | FileNotFound
            | ScriptNameAlreadySet
            | ExpectedSubArrayTypeMismatchWeak
            | FileSystemDisabled
            | NetworkingDisabled
            | FailedToEstablishConnection
            | ExpectedArrayToHaveElementsWeak
            | ClipboardDisabled
            | FailedToCopyToClipboard
            | FormatInvalidPlaceholder
            | ZeroDivisor
            | MarkerNotExisting
            | ExpectedNonNullValueWeak
            | ConfigEntryNotFoundWeak
            | ExpectedVehicleWeak
            | ExpectedUnitWeak
            | MarkerAlreadyExisting
            | TypeMismatchWeak
            | VariableNotFound
            | NoValueFoundForRightArgumentWeak
            | NoValueFoundForLeftArgumentWeak
            | CallstackFoundNoValueWeak
            | GroupNotEmpty
            | ForStepVariableTypeMismatch
            | ForStepNoWorkShouldBeDone
            | InvalidMarkerShape => Severity::Warning,
            InfoMessage => Severity::Info,
            ReturningNil
            | ReturningEmptyArray
            | ReturningConfigNull
            | ExtensionLoaded
            | ReturningEmptyString
            | ReturningEmptyScriptHandle
            | ReturningErrorCode
            | ReturningDefaultArray
            | ReturningScalarZero
            | ReturningFalse => Severity::Verbose,
        }
    }

    /// Returns the sibling kind reporting the same fact at the other severity.
    ///
    /// Error-level kinds map to their warning-level `Weak` twin and back.
    /// Kinds without a twin return `None`.
    pub fn twin(self) -> Option<DiagnosticKind> {
        use DiagnosticKind::*;
        let twin = match self {
            ExpectedArraySizeMismatch => ExpectedArraySizeMismatchWeak,
            ExpectedArraySizeMismatchWeak => ExpectedArraySizeMismatch,
            ExpectedMinimumArraySizeMismatch => ExpectedMinimumArraySizeMismatchWeak,
            ExpectedMinimumArraySizeMismatchWeak => ExpectedMinimumArraySizeMismatch,
            ExpectedArrayTypeMismatch => ExpectedArrayTypeMismatchWeak,
            ExpectedArrayTypeMismatchWeak => ExpectedArrayTypeMismatch,
            IndexOutOfRange => IndexOutOfRangeWeak,
            IndexOutOfRangeWeak => IndexOutOfRange,
            NegativeIndex => NegativeIndexWeak,
            NegativeIndexWeak => NegativeIndex,
            NegativeSize => NegativeSizeWeak,
            NegativeSizeWeak => NegativeSize,
            StartIndexExceedsToIndex => StartIndexExceedsToIndexWeak,
            StartIndexExceedsToIndexWeak => StartIndexExceedsToIndex,
            ExpectedSubArrayTypeMismatch => ExpectedSubArrayTypeMismatchWeak,
            ExpectedSubArrayTypeMismatchWeak => ExpectedSubArrayTypeMismatch,
            ExpectedArrayToHaveElements => ExpectedArrayToHaveElementsWeak,
            ExpectedArrayToHaveElementsWeak => ExpectedArrayToHaveElements,
            ExpectedNonNullValue => ExpectedNonNullValueWeak,
            ExpectedNonNullValueWeak => ExpectedNonNullValue,
            ConfigEntryNotFound => ConfigEntryNotFoundWeak,
            ConfigEntryNotFoundWeak => ConfigEntryNotFound,
            ExpectedVehicle => ExpectedVehicleWeak,
            ExpectedVehicleWeak => ExpectedVehicle,
            ExpectedUnit => ExpectedUnitWeak,
            ExpectedUnitWeak => ExpectedUnit,
            TypeMismatch => TypeMismatchWeak,
            TypeMismatchWeak => TypeMismatch,
            NoValueFoundForRightArgument => NoValueFoundForRightArgumentWeak,
            NoValueFoundForRightArgumentWeak => NoValueFoundForRightArgument,
            NoValueFoundForLeftArgument => NoValueFoundForLeftArgumentWeak,
            NoValueFoundForLeftArgumentWeak => NoValueFoundForLeftArgument,
            CallstackFoundNoValue => CallstackFoundNoValueWeak,
            CallstackFoundNoValueWeak => CallstackFoundNoValue,
            _ => return None,
        };
        Some(twin)
    }

    /// Returns `true` for the warning-level half of a Strong/Weak pair.
    pub fn is_weak(self) -> bool {
        self.twin().is_some() && self.severity() == Severity::Warning
    }

    /// Returns a one-line description of the condition this kind reports.
    pub fn summary(self) -> &'static str {
        use DiagnosticKind::*;
        match self {
            ArgCountMismatch => {
                "A macro was invoked with a different number of arguments than it declares."
            }
            UnexpectedDataAfterInclude => "Text follows the path of an `#include` directive.",
            RecursiveInclude => "A file includes itself, directly or through other includes.",
            IncludeFailed => "An `#include` directive could not be resolved or read.",
            MacroDefinedTwice => "A macro is defined again without being undefined first.",
            MacroNotFound => "`#undef` or `#ifdef` names a macro that is not defined.",
            UnexpectedIfdef => "`#ifdef` appears while another conditional block is still open.",
            UnexpectedIfndef => "`#ifndef` appears while another conditional block is still open.",
            UnexpectedElse => "`#else` appears outside of a conditional block.",
            UnexpectedEndif => "`#endif` appears outside of a conditional block.",
            MissingEndif => "A conditional block is not closed before the end of the file.",
            UnknownInstruction => "An unknown preprocessor directive was found.",
            EmptyArgument => "A macro argument is empty.",
            ExpectedSemicolon => "An assembly statement is not terminated by `;`.",
            NoViableAlternativeInstructions => "No instruction form matches the assembly input.",
            NoViableAlternativeArg => "No argument form matches the assembly input.",
            ExpectedEndStatement => "An `endStatement` instruction was expected.",
            ExpectedCallNular => "A `callNular` instruction was expected.",
            ExpectedNularOperator => "A nular operator name was expected.",
            UnknownNularOperator => "The named nular operator does not exist.",
            ExpectedCallUnary => "A `callUnary` instruction was expected.",
            ExpectedUnaryOperator => "A unary operator name was expected.",
            UnknownUnaryOperator => "The named unary operator does not exist.",
            ExpectedCallBinary => "A `callBinary` instruction was expected.",
            ExpectedBinaryOperator => "A binary operator name was expected.",
            UnknownBinaryOperator => "The named binary operator does not exist.",
            ExpectedAssignTo => "An `assignTo` instruction was expected.",
            ExpectedVariableName => "A variable name was expected.",
            ExpectedAssignToLocal => "An `assignToLocal` instruction was expected.",
            ExpectedGetVariable => "A `getVariable` instruction was expected.",
            ExpectedMakeArray => "A `makeArray` instruction was expected.",
            ExpectedInteger => "An integer literal was expected.",
            ExpectedPush => "A `push` instruction was expected.",
            ExpectedTypeName => "A type name was expected.",
            NumberOutOfRange => "A numeric literal does not fit its target type.",
            ExpectedStatementTerminator => "A statement is not terminated by `;` or `,`.",
            NoViableAlternativeStatement => "No statement form matches the input.",
            MissingUnderscoreOnPrivateVariable => {
                "A `private` variable name does not start with `_`."
            }
            ExpectedBinaryExpression => "A binary expression was expected.",
            MissingRightArgument => "A binary operator has no right-hand side.",
            MissingRoundClosingBracket => "A `(` is never closed.",
            MissingCurlyClosingBracket => "A `{` is never closed.",
            MissingSquareClosingBracket => "A `[` is never closed.",
            NoViableAlternativePrimaryExpression => "No primary expression form matches the input.",
            EmptyNumber => "A number literal has no digits.",
            ExpectedSqf => "Script code was expected.",
            EndOfFile => "The input ended unexpectedly.",
            ConfigExpectedStatementTerminator => "A config statement is not terminated by `;`.",
            ConfigNoViableAlternativeNode => "No config node form matches the input.",
            ConfigExpectedIdentifier => "An identifier was expected.",
            ConfigMissingRoundClosingBracket => "A `(` is never closed.",
            ConfigMissingCurlyOpeningBracket => "A class body is missing its `{`.",
            ConfigMissingCurlyClosingBracket => "A `{` is never closed.",
            ConfigMissingSquareClosingBracket => "A `[` is never closed.",
            ConfigMissingEqualSign => "A value assignment is missing its `=`.",
            ConfigExpectedArray => "An array value was expected.",
            ConfigExpectedValue => "A value was expected.",
            ConfigNoViableAlternativeValue => "No value form matches the input.",
            ConfigEndOfFileNotReached => "Parsing stopped before the end of the input.",
            UnassignedVariable => "A variable is read before anything was assigned to it.",
            Stacktrace => "The VM aborted; carries the rendered call stack.",
            MaximumInstructionCountReached => {
                "The VM executed more instructions than it is allowed to."
            }
            ExpectedArraySizeMismatch => "An array has the wrong number of elements.",
            ExpectedArraySizeMismatchWeak => "An array has the wrong number of elements.",
            ExpectedMinimumArraySizeMismatch => "An array has fewer elements than required.",
            ExpectedMinimumArraySizeMismatchWeak => "An array has fewer elements than required.",
            ExpectedArrayTypeMismatch => "An array element has the wrong type.",
            ExpectedArrayTypeMismatchWeak => "An array element has the wrong type.",
            IndexOutOfRange => "An index lies past the end of an array.",
            IndexOutOfRangeWeak => "An index lies past the end of an array.",
            NegativeIndex => "An index is negative.",
            NegativeIndexWeak => "An index is negative.",
            IndexEqualsRange => {
                "An index equals the array size and addresses the slot just past the end."
            }
            ReturningNil => "An operator gives up and returns nil.",
            ReturningEmptyArray => "An operator gives up and returns an empty array.",
            NegativeSize => "A size argument is negative.",
            NegativeSizeWeak => "A size argument is negative.",
            ArrayRecursion => "An array would contain itself.",
            InfoMessage => "Informational output produced by a script.",
            SuspensionDisabled => "A script tried to suspend while suspension is disabled.",
            SuspensionInUnscheduledEnvironment => {
                "A script tried to suspend in an unscheduled environment."
            }
            ReturningConfigNull => "An operator gives up and returns configNull.",
            AssertFailed => "A script assertion failed.",
            StartIndexExceedsToIndex => "A range starts after it ends.",
            StartIndexExceedsToIndexWeak => "A range starts after it ends.",
            MagicVariableTypeMismatch => "A magic variable holds a value of the wrong type.",
            ScriptHandleAlreadyTerminated => "The script handle was already terminated.",
            ScriptHandleAlreadyFinished => "The script handle already finished.",
            ExtensionLoaded => "An extension library was loaded.",
            ExtensionNotTerminatingVersionString => {
                "An extension did not null-terminate its version string."
            }
            ExtensionNotTerminatingCallExtensionBufferString => {
                "An extension did not null-terminate its call output buffer."
            }
            ExtensionNotTerminatingCallExtensionArgBufferString => {
                "An extension did not null-terminate its argument-call output buffer."
            }
            LibraryNameContainsPath => "An extension name contains path components.",
            ReturningEmptyString => "An operator gives up and returns an empty string.",
            ExtensionRuntimeError => "Calling into an extension failed.",
            FileNotFound => "A file could not be found.",
            ScopeNameAlreadySet => "The scope already has a name.",
            ScriptNameAlreadySet => "The script already has a name.",
            ReturningEmptyScriptHandle => {
                "An operator gives up and returns an empty script handle."
            }
            ReturningErrorCode => "An operator returns an error code.",
            ExpectedSubArrayTypeMismatch => "A nested array element has the wrong type.",
            ExpectedSubArrayTypeMismatchWeak => "A nested array element has the wrong type.",
            ErrorMessage => "Error output produced by a script.",
            FileSystemDisabled => "File system access is disabled.",
            NetworkingDisabled => "Networking is disabled.",
            AlreadyConnected => "A network connection is already established.",
            NetworkingFormatMismatch => "A network address has the wrong format.",
            FailedToEstablishConnection => "A network connection could not be established.",
            ExpectedArrayToHaveElements => "An array is empty but elements are required.",
            ExpectedArrayToHaveElementsWeak => "An array is empty but elements are required.",
            ClipboardDisabled => "Clipboard access is disabled.",
            FailedToCopyToClipboard => "Copying to the clipboard failed.",
            FormatInvalidPlaceholder => "A format string contains an invalid placeholder.",
            ZeroDivisor => "A division by zero was attempted.",
            MarkerNotExisting => "The named marker does not exist.",
            ReturningDefaultArray => "An operator gives up and returns a default-filled array.",
            ReturningScalarZero => "An operator gives up and returns 0.",
            ExpectedNonNullValue => "A null value was passed where a value is required.",
            ExpectedNonNullValueWeak => "A null value was passed where a value is required.",
            ConfigEntryNotFound => "A config entry could not be found.",
            ConfigEntryNotFoundWeak => "A config entry could not be found.",
            ExpectedVehicle => "An object is not a vehicle.",
            ExpectedVehicleWeak => "An object is not a vehicle.",
            ExpectedUnit => "An object is not a unit.",
            ExpectedUnitWeak => "An object is not a unit.",
            ReturningFalse => "An operator gives up and returns false.",
            MarkerAlreadyExisting => "A marker with this name already exists.",
            TypeMismatch => "A value has the wrong type.",
            TypeMismatchWeak => "A value has the wrong type.",
            VariableNotFound => "A variable is not defined in any reachable scope.",
            StackCorruptionMissingValues => {
                "The value stack holds fewer values than an instruction needs."
            }
            NoValueFoundForRightArgument => "An operator has no value for its right argument.",
            NoValueFoundForRightArgumentWeak => "An operator has no value for its right argument.",
            NoValueFoundForLeftArgument => "An operator has no value for its left argument.",
            NoValueFoundForLeftArgumentWeak => "An operator has no value for its left argument.",
            UnknownInputTypeCombinationBinary => {
                "No operator overload accepts the given operand types."
            }
            FoundNoValue => "The value stack is empty.",
            CallstackFoundNoValue => "The named callstack has no value on its stack.",
            CallstackFoundNoValueWeak => "The named callstack has no value on its stack.",
            GroupNotEmpty => "A group still has members.",
            ForStepVariableTypeMismatch => {
                "The loop variable of a `for` step loop has the wrong type."
            }
            ForStepNoWorkShouldBeDone => "A `for` step loop will never run its body.",
            InvalidMarkerShape => "A marker shape name is not recognized.",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique() {
        let codes: HashSet<u32> = DiagnosticKind::ALL.iter().map(|k| k.code().value()).collect();
        assert_eq!(codes.len(), DiagnosticKind::ALL.len());
    }

    #[test]
    fn all_is_sorted_by_code() {
        for pair in DiagnosticKind::ALL.windows(2) {
            assert!(pair[0].code() < pair[1].code(), "{} before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn codes_lie_in_their_domain_block() {
        for kind in DiagnosticKind::ALL {
            assert_eq!(kind.code().domain(), Some(kind.domain()), "{kind}");
        }
    }

    #[test]
    fn code_ranges_are_contiguous() {
        for domain in Domain::ALL {
            let mut codes: Vec<u32> = DiagnosticKind::ALL
                .iter()
                .filter(|k| k.domain() == domain)
                .map(|k| k.code().value())
                .collect();
            codes.sort_unstable();
            for (i, code) in codes.iter().enumerate() {
                assert_eq!(*code, domain.base() + 1 + i as u32, "gap in {domain}");
            }
        }
    }

    #[test]
    fn from_code_finds_every_kind() {
        for kind in DiagnosticKind::ALL {
            assert_eq!(DiagnosticKind::from_code(kind.code().value()), Some(kind));
        }
        assert_eq!(DiagnosticKind::from_code(60_000), None);
        assert_eq!(DiagnosticKind::from_code(99_999), None);
    }

    #[test]
    fn twins_are_symmetric_and_split_by_severity() {
        for kind in DiagnosticKind::ALL {
            if let Some(twin) = kind.twin() {
                assert_eq!(twin.twin(), Some(kind));
                assert_eq!(twin.domain(), kind.domain());
                assert_ne!(twin.severity(), kind.severity());
                let mut pair = [kind.severity(), twin.severity()];
                pair.sort();
                assert_eq!(pair, [Severity::Warning, Severity::Error]);
                assert_eq!(kind.summary(), twin.summary());
            }
        }
    }

    #[test]
    fn weak_kinds_are_named_weak() {
        for kind in DiagnosticKind::ALL {
            assert_eq!(kind.is_weak(), kind.to_string().ends_with("Weak"), "{kind}");
        }
    }

    #[test]
    fn fixed_severities() {
        assert_eq!(DiagnosticKind::Stacktrace.severity(), Severity::Fatal);
        assert_eq!(DiagnosticKind::VariableNotFound.severity(), Severity::Warning);
        assert_eq!(DiagnosticKind::InfoMessage.severity(), Severity::Info);
        assert_eq!(DiagnosticKind::ReturningNil.severity(), Severity::Verbose);
        assert_eq!(DiagnosticKind::ExpectedArraySizeMismatch.severity(), Severity::Error);
        assert_eq!(DiagnosticKind::ExpectedArraySizeMismatchWeak.severity(), Severity::Warning);
    }

    #[test]
    fn display_uses_variant_name() {
        assert_eq!(DiagnosticKind::IncludeFailed.to_string(), "IncludeFailed");
        assert_eq!(DiagnosticKind::IncludeFailed.code().value(), 10_004);
    }
}
