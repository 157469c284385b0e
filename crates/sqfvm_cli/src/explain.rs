//! `sqfvm-diag explain`: describe a single catalog entry.

use sqfvm_diagnostics::DiagnosticKind;

/// Runs the `sqfvm-diag explain` command.
pub fn run(query: &str) -> Result<i32, Box<dyn std::error::Error>> {
    let kind = lookup(query).ok_or_else(|| format!("unknown diagnostic '{query}'"))?;
    print!("{}", describe(kind));
    Ok(0)
}

/// Resolves a numeric code or a kind name.
fn lookup(query: &str) -> Option<DiagnosticKind> {
    let query = query.trim();
    match query.parse::<u32>() {
        Ok(code) => DiagnosticKind::from_code(code),
        Err(_) => DiagnosticKind::ALL
            .into_iter()
            .find(|kind| kind.to_string().eq_ignore_ascii_case(query)),
    }
}

/// Formats the details of `kind`, one field per line.
fn describe(kind: DiagnosticKind) -> String {
    let mut out = format!(
        "{} {}\n  domain:   {}\n  severity: {} {}\n  summary:  {}\n",
        kind.code(),
        kind,
        kind.domain(),
        kind.severity(),
        kind.severity().tag(),
        kind.summary()
    );
    if let Some(twin) = kind.twin() {
        out.push_str(&format!(
            "  twin:     {} {} ({})\n",
            twin.code(),
            twin,
            twin.severity()
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_code_and_name() {
        assert_eq!(lookup("60070"), Some(DiagnosticKind::VariableNotFound));
        assert_eq!(lookup("variablenotfound"), Some(DiagnosticKind::VariableNotFound));
        assert_eq!(lookup("99999"), None);
        assert_eq!(lookup("NoSuchThing"), None);
    }

    #[test]
    fn describe_twin() {
        let text = describe(DiagnosticKind::ExpectedArraySizeMismatch);
        assert!(text.starts_with("60003 ExpectedArraySizeMismatch\n"));
        assert!(text.contains("  domain:   runtime\n"));
        assert!(text.contains("  severity: error [ERR]\n"));
        assert!(text.contains("  twin:     60004 ExpectedArraySizeMismatchWeak (warning)\n"));
    }

    #[test]
    fn describe_without_twin() {
        let text = describe(DiagnosticKind::MacroNotFound);
        assert!(text.contains("severity: warning [WRN]"));
        assert!(!text.contains("twin"));
    }

    #[test]
    fn unknown_query_is_an_error() {
        let err = run("12").unwrap_err();
        assert_eq!(err.to_string(), "unknown diagnostic '12'");
    }
}
