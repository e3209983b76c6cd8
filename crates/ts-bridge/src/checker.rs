use crate::toolchain::Toolchain;
use shared::NanoId;
use std::fs;
use std::process::Command;
use std::sync::Mutex;
use std::sync::PoisonError;
use tempfile::TempDir;
use tslab_core::{
    CompilerConfig, DiagnosticMarker, MarkerSeverity, ServiceError, TypeCheckService, snippet_path,
};

/// `tsc --noEmit` over one snippet file per query. Each playground gets
/// its own file under the scratch directory, so diagnostics never leak
/// between concurrently mounted playgrounds.
pub struct TscCheckService {
    toolchain: Toolchain,
    workdir: TempDir,
    config: Mutex<CompilerConfig>,
}

impl TscCheckService {
    pub fn new(toolchain: Toolchain) -> Result<Self, ServiceError> {
        let workdir = tempfile::tempdir()
            .map_err(|err| ServiceError::Unavailable(format!("scratch dir: {err}")))?;
        Ok(Self {
            toolchain,
            workdir,
            config: Mutex::new(CompilerConfig::default()),
        })
    }

    fn compiler_args(&self) -> Vec<String> {
        let config = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        let mut args = vec![
            "--noEmit".to_string(),
            "--pretty".to_string(),
            "false".to_string(),
            "--target".to_string(),
            config.target.clone(),
            "--module".to_string(),
            config.module.clone(),
            "--moduleResolution".to_string(),
            config.module_resolution.clone(),
            "--lib".to_string(),
            config.libs.join(","),
        ];
        if config.strict {
            args.push("--strict".to_string());
        }
        args
    }
}

impl TypeCheckService for TscCheckService {
    fn configure(&self, config: &CompilerConfig) -> Result<(), ServiceError> {
        let mut current = self.config.lock().unwrap_or_else(PoisonError::into_inner);
        *current = config.clone();
        Ok(())
    }

    fn markers(
        &self,
        snippet: &NanoId,
        source: &str,
    ) -> Result<Vec<DiagnosticMarker>, ServiceError> {
        let file_path = self.workdir.path().join(snippet_path(snippet));
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|err| ServiceError::Check(format!("scratch dir: {err}")))?;
        }
        fs::write(&file_path, source)
            .map_err(|err| ServiceError::Check(format!("snippet write: {err}")))?;

        let output = Command::new(&self.toolchain.tsc)
            .args(self.compiler_args())
            .arg(&file_path)
            .current_dir(self.workdir.path())
            .output()
            .map_err(|err| ServiceError::Unavailable(format!("{}: {err}", self.toolchain.tsc)))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(parse_diagnostics(&stdout))
    }
}

/// Parses `--pretty false` diagnostic output. One diagnostic per line in
/// the shape `path(line,col): severity TSxxxx: message`; indented
/// continuation lines extend the previous message.
pub fn parse_diagnostics(output: &str) -> Vec<DiagnosticMarker> {
    let mut markers: Vec<DiagnosticMarker> = Vec::new();

    for line in output.lines() {
        if line.is_empty() {
            continue;
        }
        if line.starts_with(' ') || line.starts_with('\t') {
            if let Some(last) = markers.last_mut() {
                last.message.push(' ');
                last.message.push_str(line.trim());
            }
            continue;
        }
        if let Some(marker) = parse_diagnostic_line(line) {
            markers.push(marker);
        }
    }

    markers
}

fn parse_diagnostic_line(line: &str) -> Option<DiagnosticMarker> {
    // path(3,5): error TS2322: message
    let open = line.find('(')?;
    let close = line[open..].find(')')? + open;
    let mut positions = line[open + 1..close].split(',');
    let row: u32 = positions.next()?.trim().parse().ok()?;
    let column: u32 = positions.next()?.trim().parse().ok()?;

    let rest = line[close + 1..].strip_prefix(": ")?;
    let (severity_word, rest) = rest.split_once(' ')?;
    let severity = match severity_word {
        "error" => MarkerSeverity::Error,
        "warning" => MarkerSeverity::Warning,
        "message" | "suggestion" => MarkerSeverity::Info,
        _ => return None,
    };
    let (_code, message) = rest.split_once(": ")?;

    Some(DiagnosticMarker::new(severity, message, row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_error_line() {
        let output = "snippets/ab12.ts(1,5): error TS2322: Type 'string' is not assignable to type 'number'.\n";
        let markers = parse_diagnostics(output);
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].severity, MarkerSeverity::Error);
        assert_eq!(markers[0].line, 1);
        assert_eq!(markers[0].column, 5);
        assert_eq!(
            markers[0].message,
            "Type 'string' is not assignable to type 'number'."
        );
    }

    #[test]
    fn test_parse_multiple_lines_in_order() {
        let output = "\
a.ts(1,1): error TS2304: Cannot find name 'x'.
a.ts(2,3): warning TS6133: 'y' is declared but its value is never read.
";
        let markers = parse_diagnostics(output);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].line, 1);
        assert_eq!(markers[1].severity, MarkerSeverity::Warning);
    }

    #[test]
    fn test_continuation_lines_extend_message() {
        let output = "\
a.ts(4,7): error TS2345: Argument of type '{ id: number; }' is not assignable to parameter of type 'User'.
  Property 'name' is missing in type '{ id: number; }' but required in type 'User'.
";
        let markers = parse_diagnostics(output);
        assert_eq!(markers.len(), 1);
        assert!(markers[0].message.contains("Argument of type"));
        assert!(markers[0].message.contains("Property 'name' is missing"));
    }

    #[test]
    fn test_non_diagnostic_lines_ignored() {
        let output = "Some banner text\nerror TS5042: weird line without location\n";
        assert!(parse_diagnostics(output).is_empty());
    }

    #[test]
    fn test_empty_output_yields_no_markers() {
        assert!(parse_diagnostics("").is_empty());
    }
}
