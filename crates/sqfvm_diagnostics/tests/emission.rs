//! End-to-end tests for emitting catalog diagnostics through a gated logger.
//!
//! Each test wires an [`Emitter`] to a [`Logger`] backed by a [`CaptureSink`]
//! and checks what reaches the sink.

use sqfvm_diagnostics::{
    ArraySize, CaptureSink, DiagnosticKind, DiagnosticMessage, Emitter, LocationInfo, Logger,
    ParserDiagnostic, PreprocessorDiagnostic, RuntimeDiagnostic, Severity,
};
use sqfvm_source::{PositionInfo, PreprocessorFileInfo, SourceFile, SyntaxSpan};

fn capture() -> (Logger, CaptureSink) {
    let sink = CaptureSink::new();
    (Logger::new(sink.clone()), sink)
}

#[test]
fn disabled_warning_is_dropped_while_error_passes() {
    let (logger, sink) = capture();
    logger.set_enabled(Severity::Warning, false);
    let emitter = Emitter::new(&logger);

    let warning = DiagnosticMessage::new(
        LocationInfo::new("init.sqf", 4, 2),
        RuntimeDiagnostic::ZeroDivisor,
    );
    let error = DiagnosticMessage::new(
        LocationInfo::new("init.sqf", 5, 2),
        RuntimeDiagnostic::ArrayRecursion,
    );
    emitter.emit(&warning);
    emitter.emit(&error);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, Severity::Error);
    assert_eq!(lines[0].1, "init.sqf:5:2: Array would contain itself.");
}

#[test]
fn variable_not_found_mentions_name_and_location() {
    let (logger, sink) = capture();
    let msg = DiagnosticMessage::new(
        LocationInfo::new("test.sqf", 3, 7),
        RuntimeDiagnostic::VariableNotFound {
            variable: "_foo".to_string(),
        },
    );
    Emitter::new(&logger).emit(&msg);

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    let text = &lines[0].1;
    for needle in ["_foo", "test.sqf", "3", "7"] {
        assert!(text.contains(needle), "{text:?} lacks {needle:?}");
    }
}

#[test]
fn array_size_twins_differ_only_in_tag() {
    let (logger, sink) = capture();
    let emitter = Emitter::new(&logger);
    let location = LocationInfo::new("fn_spawn.sqf", 12, 9);
    emitter.emit(&DiagnosticMessage::new(
        location.clone(),
        RuntimeDiagnostic::ExpectedArraySizeMismatch(ArraySize::exact(2, 5)),
    ));
    emitter.emit(&DiagnosticMessage::new(
        location,
        RuntimeDiagnostic::ExpectedArraySizeMismatchWeak(ArraySize::exact(2, 5)),
    ));

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].0, Severity::Error);
    assert_eq!(lines[1].0, Severity::Warning);
    assert_eq!(lines[0].1, lines[1].1);
    assert!(lines[0].1.contains("expected 2"));
    assert!(lines[0].1.contains("got 5"));

    let console = sink.console_text();
    let mut rows = console.lines();
    assert!(rows.next().is_some_and(|row| row.starts_with("[ERR] ")));
    assert!(rows.next().is_some_and(|row| row.starts_with("[WRN] ")));
}

#[test]
fn locations_from_every_collaborator_shape() {
    let (logger, sink) = capture();
    let emitter = Emitter::new(&logger);

    let mut file = PreprocessorFileInfo::new("macros.hpp", "#define A\n#ifdef");
    while file.line == 1 {
        file.next_char();
    }
    emitter.emit(&DiagnosticMessage::new(
        LocationInfo::from_preprocessor_file(&file),
        PreprocessorDiagnostic::MissingEndif,
    ));

    let span = SyntaxSpan {
        path: "init.sqf".to_string(),
        start_line: 8,
        start_col: 4,
        end_line: 8,
        end_col: 9,
        start: 120,
        end: 125,
    };
    emitter.emit(&DiagnosticMessage::new(
        LocationInfo::from_syntax_node(&span),
        ParserDiagnostic::ExpectedSqf,
    ));

    let position = PositionInfo::new("fn_loop.sqf", 2, 11, 30);
    emitter.emit(&DiagnosticMessage::new(
        LocationInfo::from_position(&position),
        RuntimeDiagnostic::FoundNoValue,
    ));

    let rendered: Vec<String> = sink.lines().into_iter().map(|(_, text)| text).collect();
    assert_eq!(
        rendered,
        vec![
            "macros.hpp:2:0: Missing #endif before the end of the file.".to_string(),
            "init.sqf:8:4: Expected SQF code.".to_string(),
            "fn_loop.sqf:2:11: Found no value on the stack.".to_string(),
        ]
    );
}

#[test]
fn fatal_threshold_keeps_only_fatal() {
    let (logger, sink) = capture();
    logger.set_threshold(Severity::Fatal);
    let emitter = Emitter::new(&logger);
    let msg = DiagnosticMessage::new(
        LocationInfo::unknown(),
        RuntimeDiagnostic::MaximumInstructionCountReached { maximum: 5 },
    );
    assert_eq!(msg.kind(), DiagnosticKind::MaximumInstructionCountReached);
    emitter.emit(&msg);
    emitter.emit(&DiagnosticMessage::new(
        LocationInfo::unknown(),
        RuntimeDiagnostic::AssertFailed,
    ));
    assert_eq!(
        sink.console_text(),
        "[FAT] <unknown>:0:0: Maximum instruction count of 5 reached.\n"
    );
}

#[test]
fn parser_location_from_source_offsets() {
    let (logger, sink) = capture();
    let file = SourceFile::new("fn_init.sqf", "private _a = 1;\nfoo = ;\n".to_string());
    let span = file.resolve_span(22, 23);
    Emitter::new(&logger).emit(&DiagnosticMessage::new(
        LocationInfo::from_syntax_node(&span),
        ParserDiagnostic::NoViableAlternativePrimaryExpression,
    ));
    assert_eq!(
        sink.lines(),
        vec![(
            Severity::Error,
            "fn_init.sqf:2:7: No viable alternative for primary expression.".to_string()
        )]
    );
}
