//! `sqfvm-diag codes`: list catalog entries.

use serde::Serialize;
use sqfvm_diagnostics::{DiagnosticCode, DiagnosticKind, Domain, Severity};

use crate::{CodesArgs, ReportFormat};

/// One catalog entry as printed in JSON output.
#[derive(Debug, Serialize)]
struct CodeEntry {
    code: DiagnosticCode,
    name: String,
    severity: Severity,
    domain: Domain,
    summary: &'static str,
    twin: Option<DiagnosticCode>,
}

impl From<DiagnosticKind> for CodeEntry {
    fn from(kind: DiagnosticKind) -> Self {
        CodeEntry {
            code: kind.code(),
            name: kind.to_string(),
            severity: kind.severity(),
            domain: kind.domain(),
            summary: kind.summary(),
            twin: kind.twin().map(DiagnosticKind::code),
        }
    }
}

/// Runs the `sqfvm-diag codes` command.
pub fn run(args: &CodesArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let kinds = select(args);
    print!("{}", render(&kinds, args.format)?);
    Ok(0)
}

/// Applies the `--domain` and `--severity` filters in code order.
fn select(args: &CodesArgs) -> Vec<DiagnosticKind> {
    let domain = args.domain.map(Domain::from);
    let severity = args.severity.map(Severity::from);
    DiagnosticKind::ALL
        .into_iter()
        .filter(|kind| domain.map_or(true, |d| kind.domain() == d))
        .filter(|kind| severity.map_or(true, |s| kind.severity() == s))
        .collect()
}

/// Formats the selected kinds as a table or a JSON array.
fn render(kinds: &[DiagnosticKind], format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => {
            let mut out = String::new();
            for kind in kinds {
                out.push_str(&format!(
                    "{}  {:<7}  {:<12}  {}\n",
                    kind.code(),
                    kind.severity().name(),
                    kind.domain().name(),
                    kind
                ));
            }
            Ok(out)
        }
        ReportFormat::Json => {
            let entries: Vec<CodeEntry> = kinds.iter().copied().map(CodeEntry::from).collect();
            let mut json = serde_json::to_string_pretty(&entries)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DomainArg, SeverityArg};

    fn args(domain: Option<DomainArg>, severity: Option<SeverityArg>) -> CodesArgs {
        CodesArgs {
            domain,
            severity,
            format: ReportFormat::Text,
        }
    }

    #[test]
    fn no_filter_lists_everything() {
        assert_eq!(select(&args(None, None)).len(), DiagnosticKind::ALL.len());
    }

    #[test]
    fn filters_combine() {
        let kinds = select(&args(Some(DomainArg::Runtime), Some(SeverityArg::Fatal)));
        assert_eq!(
            kinds,
            vec![
                DiagnosticKind::Stacktrace,
                DiagnosticKind::MaximumInstructionCountReached
            ]
        );
    }

    #[test]
    fn linting_table_row() {
        let kinds = select(&args(Some(DomainArg::Linting), None));
        let text = render(&kinds, ReportFormat::Text).unwrap();
        assert_eq!(text, "50001  warning  linting       UnassignedVariable\n");
    }

    #[test]
    fn json_carries_twin_codes() {
        let text = render(
            &[DiagnosticKind::TypeMismatch, DiagnosticKind::ZeroDivisor],
            ReportFormat::Json,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["code"], 60068);
        assert_eq!(value[0]["severity"], "error");
        assert_eq!(value[0]["domain"], "runtime");
        assert_eq!(value[0]["twin"], 60069);
        assert!(value[1]["twin"].is_null());
    }
}
