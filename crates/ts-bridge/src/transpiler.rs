use crate::checker::parse_diagnostics;
use crate::toolchain::Toolchain;
use std::fs;
use std::process::Command;
use std::sync::Mutex;
use std::sync::PoisonError;
use tempfile::TempDir;
use tslab_core::{ServiceError, TranspileService};

/// Strips type annotations by emitting JavaScript with `tsc`. Emit is not
/// gated on type errors (the filter already decided those), so only a
/// genuine parse failure, where no output file appears, fails the
/// transpile.
pub struct TscTranspiler {
    toolchain: Toolchain,
    workdir: TempDir,
    // tsc writes `input.js` next to `input.ts`; serialize callers so two
    // runs never race on the same pair of files.
    gate: Mutex<()>,
}

impl TscTranspiler {
    pub fn new(toolchain: Toolchain) -> Result<Self, ServiceError> {
        let workdir = tempfile::tempdir()
            .map_err(|err| ServiceError::Unavailable(format!("scratch dir: {err}")))?;
        Ok(Self {
            toolchain,
            workdir,
            gate: Mutex::new(()),
        })
    }
}

impl TranspileService for TscTranspiler {
    fn transpile(&self, source: &str) -> Result<String, ServiceError> {
        let _serial = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        let input = self.workdir.path().join("input.ts");
        let output_file = self.workdir.path().join("input.js");
        let _ = fs::remove_file(&output_file);
        fs::write(&input, source)
            .map_err(|err| ServiceError::Transpile(format!("snippet write: {err}")))?;

        let output = Command::new(&self.toolchain.tsc)
            .args([
                "--target",
                "es2020",
                "--module",
                "commonjs",
                "--pretty",
                "false",
            ])
            .arg(&input)
            .current_dir(self.workdir.path())
            .output()
            .map_err(|err| ServiceError::Unavailable(format!("{}: {err}", self.toolchain.tsc)))?;

        match fs::read_to_string(&output_file) {
            Ok(transpiled) => Ok(transpiled),
            Err(_) => Err(ServiceError::Transpile(first_failure_message(
                &String::from_utf8_lossy(&output.stdout),
            ))),
        }
    }
}

fn first_failure_message(stdout: &str) -> String {
    parse_diagnostics(stdout)
        .into_iter()
        .next()
        .map_or_else(|| "Transpilation produced no output".to_string(), |marker| marker.message)
}
