use crate::console;
use crate::constants::CoreConstants;
use crate::filter::filter_markers;
use crate::run_control::RunControl;
use crate::services::{PlaygroundServices, ServiceError};
use serde::{Deserialize, Serialize};
use shared::NanoId;
use std::sync::mpsc::channel;

/// Result of one run. Exactly one outcome is live per run; a newer run
/// invalidates the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionOutcome {
    /// Filtered static diagnostics remained; nothing was executed.
    TypeDiagnosticFailure { messages: Vec<String> },
    /// Transpilation failed or the program threw.
    RuntimeFailure { message: String },
    /// The program ran to completion; `captured_output` holds the joined
    /// console lines or the no-output sentinel.
    Success { captured_output: String },
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success { .. })
    }
}

/// Runs one snippet end to end: waits out the marker settle period,
/// short-circuits on filtered diagnostics, transpiles, and executes with
/// console capture. Steps are mutually exclusive; nothing is retried.
pub struct ExecutionSandbox {
    services: PlaygroundServices,
    settle_ms: u64,
}

impl ExecutionSandbox {
    pub fn new(services: PlaygroundServices) -> Self {
        Self {
            services,
            settle_ms: CoreConstants::MARKER_SETTLE_MS,
        }
    }

    #[must_use]
    pub fn with_settle_ms(mut self, settle_ms: u64) -> Self {
        self.settle_ms = settle_ms;
        self
    }

    /// Returns None when `seq` was superseded before the outcome was
    /// decided; the caller must not display anything for such a run.
    pub fn run(
        &self,
        snippet: &NanoId,
        source: &str,
        control: &RunControl,
        seq: u64,
    ) -> Option<ExecutionOutcome> {
        if !control.wait_settle(self.settle_ms, seq) {
            return None;
        }

        let markers = match self.services.checker.markers(snippet, source) {
            Ok(markers) => markers,
            Err(err) => {
                return Some(ExecutionOutcome::RuntimeFailure {
                    message: err.to_string(),
                });
            }
        };

        let diagnostics = filter_markers(&markers);
        if !diagnostics.is_empty() {
            return Some(ExecutionOutcome::TypeDiagnosticFailure {
                messages: diagnostics,
            });
        }

        let transpiled = match self.services.transpiler.transpile(source) {
            Ok(output) => output,
            Err(ServiceError::Transpile(message)) => {
                return Some(ExecutionOutcome::RuntimeFailure { message });
            }
            Err(err) => {
                return Some(ExecutionOutcome::RuntimeFailure {
                    message: err.to_string(),
                });
            }
        };

        if !control.is_current(seq) {
            return None;
        }

        let (sender, receiver) = channel();
        let result = {
            // Guard scope: the console sink is restored before the lines
            // are drained, no matter how eval exits.
            let _capture = console::redirect(sender);
            self.services.engine.eval(&transpiled)
        };
        let lines: Vec<String> = receiver
            .try_iter()
            .take(CoreConstants::MAX_CAPTURED_LINES)
            .collect();

        match result {
            Err(ServiceError::Eval(message)) => {
                Some(ExecutionOutcome::RuntimeFailure { message })
            }
            Err(err) => Some(ExecutionOutcome::RuntimeFailure {
                message: err.to_string(),
            }),
            Ok(()) => {
                let captured_output = if lines.is_empty() {
                    CoreConstants::NO_OUTPUT_SENTINEL.to_string()
                } else {
                    lines.join("\n")
                };
                Some(ExecutionOutcome::Success { captured_output })
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::markers::DiagnosticMarker;
    use crate::services::{CompilerConfig, ScriptEngine, TranspileService, TypeCheckService};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    pub struct FixedChecker {
        pub markers: Vec<DiagnosticMarker>,
    }

    impl TypeCheckService for FixedChecker {
        fn configure(&self, _config: &CompilerConfig) -> Result<(), ServiceError> {
            Ok(())
        }

        fn markers(
            &self,
            _snippet: &NanoId,
            _source: &str,
        ) -> Result<Vec<DiagnosticMarker>, ServiceError> {
            Ok(self.markers.clone())
        }
    }

    pub struct PassThroughTranspiler;

    impl TranspileService for PassThroughTranspiler {
        fn transpile(&self, source: &str) -> Result<String, ServiceError> {
            Ok(source.to_string())
        }
    }

    pub struct FailingTranspiler {
        pub message: String,
    }

    impl TranspileService for FailingTranspiler {
        fn transpile(&self, _source: &str) -> Result<String, ServiceError> {
            Err(ServiceError::Transpile(self.message.clone()))
        }
    }

    /// Emits each script line through the console tee; a line starting
    /// with `throw ` fails evaluation with the rest as the message.
    #[derive(Default)]
    pub struct ScriptedEngine {
        pub ran: Arc<AtomicBool>,
    }

    impl ScriptEngine for ScriptedEngine {
        fn eval(&self, source: &str) -> Result<(), ServiceError> {
            self.ran.store(true, Ordering::SeqCst);
            for line in source.lines() {
                if let Some(message) = line.strip_prefix("throw ") {
                    return Err(ServiceError::Eval(message.to_string()));
                }
                if !line.is_empty() {
                    crate::console::emit(line);
                }
            }
            Ok(())
        }
    }

    pub fn services_with(
        markers: Vec<DiagnosticMarker>,
        engine: Arc<ScriptedEngine>,
    ) -> PlaygroundServices {
        PlaygroundServices::new(
            Arc::new(FixedChecker { markers }),
            Arc::new(PassThroughTranspiler),
            engine,
        )
    }

    pub fn clean_services() -> PlaygroundServices {
        services_with(Vec::new(), Arc::new(ScriptedEngine::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::markers::{DiagnosticMarker, MarkerSeverity};
    use std::sync::Arc;
    use std::sync::atomic::Ordering;
    use std::thread;
    use std::time::Duration;

    fn run_now(sandbox: &ExecutionSandbox, source: &str) -> Option<ExecutionOutcome> {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let control = RunControl::new();
        let seq = control.advance();
        sandbox.run(&NanoId::generate(), source, &control, seq)
    }

    #[test]
    fn test_clean_run_captures_output() {
        let sandbox = ExecutionSandbox::new(clean_services()).with_settle_ms(0);
        let outcome = run_now(&sandbox, "5\ndone").expect("run was not superseded");
        assert_eq!(
            outcome,
            ExecutionOutcome::Success {
                captured_output: "5\ndone".to_string()
            }
        );
    }

    #[test]
    fn test_no_output_yields_sentinel_verbatim() {
        let sandbox = ExecutionSandbox::new(clean_services()).with_settle_ms(0);
        let outcome = run_now(&sandbox, "").expect("run was not superseded");
        assert_eq!(
            outcome,
            ExecutionOutcome::Success {
                captured_output: CoreConstants::NO_OUTPUT_SENTINEL.to_string()
            }
        );
    }

    #[test]
    fn test_type_failure_short_circuits_execution() {
        let engine = Arc::new(ScriptedEngine::default());
        let markers = vec![DiagnosticMarker::error(
            "Type 'string' is not assignable to type 'number'.",
            1,
            5,
        )];
        let sandbox =
            ExecutionSandbox::new(services_with(markers, Arc::clone(&engine))).with_settle_ms(0);

        let outcome = run_now(&sandbox, "anything").expect("run was not superseded");
        assert_eq!(
            outcome,
            ExecutionOutcome::TypeDiagnosticFailure {
                messages: vec![
                    "Line 1, Col 5: Type 'string' is not assignable to type 'number'.".to_string()
                ]
            }
        );
        assert!(!engine.ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_filtered_out_markers_do_not_block_execution() {
        let engine = Arc::new(ScriptedEngine::default());
        let markers = vec![
            DiagnosticMarker::error("Cannot find name 'console'.", 1, 1),
            DiagnosticMarker::new(MarkerSeverity::Warning, "Unused variable 'x'.", 2, 1),
        ];
        let sandbox =
            ExecutionSandbox::new(services_with(markers, Arc::clone(&engine))).with_settle_ms(0);

        let outcome = run_now(&sandbox, "ok").expect("run was not superseded");
        assert!(outcome.is_success());
        assert!(engine.ran.load(Ordering::SeqCst));
    }

    #[test]
    fn test_transpile_failure_reports_transpiler_message() {
        let services = PlaygroundServices::new(
            Arc::new(FixedChecker {
                markers: Vec::new(),
            }),
            Arc::new(FailingTranspiler {
                message: "Unexpected token at line 2".to_string(),
            }),
            Arc::new(ScriptedEngine::default()),
        );
        let sandbox = ExecutionSandbox::new(services).with_settle_ms(0);

        let outcome = run_now(&sandbox, "let x: = 1;").expect("run was not superseded");
        assert_eq!(
            outcome,
            ExecutionOutcome::RuntimeFailure {
                message: "Unexpected token at line 2".to_string()
            }
        );
    }

    #[test]
    fn test_thrown_message_is_preserved() {
        let sandbox = ExecutionSandbox::new(clean_services()).with_settle_ms(0);
        let outcome = run_now(&sandbox, "throw boom").expect("run was not superseded");
        assert_eq!(
            outcome,
            ExecutionOutcome::RuntimeFailure {
                message: "boom".to_string()
            }
        );
    }

    #[test]
    fn test_output_before_throw_is_discarded_in_favor_of_error() {
        let sandbox = ExecutionSandbox::new(clean_services()).with_settle_ms(0);
        let outcome = run_now(&sandbox, "partial\nthrow late failure");
        assert_eq!(
            outcome,
            Some(ExecutionOutcome::RuntimeFailure {
                message: "late failure".to_string()
            })
        );
    }

    #[test]
    fn test_superseded_during_settle_returns_none() {
        let sandbox = Arc::new(ExecutionSandbox::new(clean_services()).with_settle_ms(5_000));
        let control = RunControl::new();
        let seq = control.advance();

        let worker_control = control.clone();
        let worker = thread::spawn(move || {
            sandbox.run(&NanoId::generate(), "x", &worker_control, seq)
        });

        thread::sleep(Duration::from_millis(20));
        control.advance();

        assert_eq!(worker.join().expect("worker panicked"), None);
    }

    #[test]
    fn test_console_sink_restored_after_throw() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let sandbox = ExecutionSandbox::new(clean_services()).with_settle_ms(0);
        let control = RunControl::new();
        let seq = control.advance();
        let _ = sandbox.run(&NanoId::generate(), "throw x", &control, seq);

        // A fresh capture must start empty and receive only its own lines.
        let (sender, receiver) = std::sync::mpsc::channel();
        {
            let _guard = crate::console::redirect(sender);
            crate::console::emit("fresh");
        }
        assert_eq!(
            receiver.try_iter().collect::<Vec<_>>(),
            vec!["fresh".to_string()]
        );
    }
}
