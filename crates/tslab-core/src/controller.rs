use crate::events::RunEvent;
use crate::run_control::RunControl;
use crate::sandbox::{ExecutionOutcome, ExecutionSandbox};
use crate::session::SnippetSession;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, channel};
use std::thread;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Succeeded,
    TypeFailed,
    RuntimeFailed,
}

impl RunState {
    pub fn is_running(self) -> bool {
        matches!(self, RunState::Running)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, RunState::TypeFailed | RunState::RuntimeFailed)
    }
}

/// Orchestrates one playground widget: owns the snippet session, drives
/// runs on worker threads and folds their outcomes into view state.
/// Exactly one of `output`/`error` is non-empty at any time.
pub struct PlaygroundController {
    session: SnippetSession,
    state: RunState,
    output: String,
    error: String,
    control: RunControl,
    receiver: Option<Receiver<RunEvent>>,
}

impl PlaygroundController {
    pub fn new(session: SnippetSession) -> Self {
        Self {
            session,
            state: RunState::Idle,
            output: String::new(),
            error: String::new(),
            control: RunControl::new(),
            receiver: None,
        }
    }

    pub fn session(&self) -> &SnippetSession {
        &self.session
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn edit(&mut self, text: impl Into<String>) {
        self.session.edit(text);
    }

    pub fn restore_draft(&mut self, text: impl Into<String>) {
        self.session.restore_draft(text);
    }

    /// Starts a run of the currently displayed source. Any in-flight run
    /// is superseded; its outcome will be discarded on arrival.
    pub fn run(&mut self, sandbox: &Arc<ExecutionSandbox>) {
        let seq = self.control.advance();
        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.state = RunState::Running;
        self.output.clear();
        self.error.clear();

        let sandbox = Arc::clone(sandbox);
        let control = self.control.clone();
        let snippet = self.session.id().clone();
        let source = self.session.current_source().to_string();

        thread::spawn(move || {
            let outcome = match catch_unwind(AssertUnwindSafe(|| {
                sandbox.run(&snippet, &source, &control, seq)
            })) {
                Ok(outcome) => outcome,
                // A broken snippet must never take the page down; surface
                // the worker's death as an ordinary runtime failure.
                Err(_) => Some(ExecutionOutcome::RuntimeFailure {
                    message: "Playground execution failed unexpectedly".to_string(),
                }),
            };
            if let Some(outcome) = outcome {
                let _ = sender.send(RunEvent { seq, outcome });
            }
        });
    }

    /// Drains pending run events, applying the newest current one.
    /// Returns true when the view state changed. Called every UI frame.
    pub fn poll(&mut self) -> bool {
        let events: Vec<RunEvent> = match &self.receiver {
            Some(receiver) => receiver.try_iter().collect(),
            None => return false,
        };

        let mut changed = false;
        for event in events {
            if !self.control.is_current(event.seq) {
                continue;
            }
            self.apply_outcome(event.outcome);
            self.receiver = None;
            changed = true;
        }
        changed
    }

    /// Returns the session to the author default and clears the outcome.
    /// Pending run results are discarded when they arrive.
    pub fn reset(&mut self) {
        self.control.advance();
        self.session.reset();
        self.clear_outcome();
    }

    /// Flips between draft and reference solution; the displayed outcome
    /// always belongs to the displayed source, so it is cleared.
    pub fn toggle_reference(&mut self) {
        if self.session.toggle_reference() {
            self.control.advance();
            self.clear_outcome();
        }
    }

    fn clear_outcome(&mut self) {
        self.state = RunState::Idle;
        self.output.clear();
        self.error.clear();
        self.receiver = None;
    }

    fn apply_outcome(&mut self, outcome: ExecutionOutcome) {
        match outcome {
            ExecutionOutcome::Success { captured_output } => {
                self.state = RunState::Succeeded;
                self.output = captured_output;
                self.error.clear();
            }
            ExecutionOutcome::TypeDiagnosticFailure { messages } => {
                self.state = RunState::TypeFailed;
                self.error = messages.join("\n");
                self.output.clear();
            }
            ExecutionOutcome::RuntimeFailure { message } => {
                self.state = RunState::RuntimeFailed;
                self.error = message;
                self.output.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CoreConstants;
    use crate::markers::DiagnosticMarker;
    use crate::sandbox::test_support::{ScriptedEngine, clean_services, services_with};
    use std::sync::PoisonError;
    use std::time::{Duration, Instant};

    fn wait_for_settle(controller: &mut PlaygroundController) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if controller.poll() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        false
    }

    fn quick_sandbox(markers: Vec<DiagnosticMarker>) -> Arc<ExecutionSandbox> {
        Arc::new(
            ExecutionSandbox::new(services_with(markers, Arc::new(ScriptedEngine::default())))
                .with_settle_ms(0),
        )
    }

    #[test]
    fn test_run_reaches_succeeded_with_output() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut controller = PlaygroundController::new(SnippetSession::new("5", None));
        let sandbox = quick_sandbox(Vec::new());

        controller.run(&sandbox);
        assert!(controller.state().is_running());
        assert!(wait_for_settle(&mut controller));

        assert_eq!(controller.state(), RunState::Succeeded);
        assert_eq!(controller.output(), "5");
        assert!(controller.error().is_empty());
    }

    #[test]
    fn test_no_output_run_shows_sentinel() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut controller = PlaygroundController::new(SnippetSession::new("", None));
        let sandbox = quick_sandbox(Vec::new());

        controller.run(&sandbox);
        assert!(wait_for_settle(&mut controller));
        assert_eq!(controller.output(), CoreConstants::NO_OUTPUT_SENTINEL);
    }

    #[test]
    fn test_type_failure_fills_error_only() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let markers = vec![DiagnosticMarker::error(
            "Type 'string' is not assignable to type 'number'.",
            1,
            5,
        )];
        let mut controller =
            PlaygroundController::new(SnippetSession::new("let x: number = \"hello\";", None));
        let sandbox = quick_sandbox(markers);

        controller.run(&sandbox);
        assert!(wait_for_settle(&mut controller));

        assert_eq!(controller.state(), RunState::TypeFailed);
        assert!(controller.output().is_empty());
        assert_eq!(
            controller.error(),
            "Line 1, Col 5: Type 'string' is not assignable to type 'number'."
        );
    }

    #[test]
    fn test_runtime_failure_shows_thrown_message() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut controller = PlaygroundController::new(SnippetSession::new("throw boom", None));
        let sandbox = quick_sandbox(Vec::new());

        controller.run(&sandbox);
        assert!(wait_for_settle(&mut controller));

        assert_eq!(controller.state(), RunState::RuntimeFailed);
        assert_eq!(controller.error(), "boom");
        assert!(controller.output().is_empty());
    }

    #[test]
    fn test_reset_discards_pending_run() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut controller = PlaygroundController::new(SnippetSession::new("5", None));
        // Long settle keeps the run in flight while we reset.
        let sandbox =
            Arc::new(ExecutionSandbox::new(clean_services()).with_settle_ms(10_000));

        controller.run(&sandbox);
        controller.reset();
        assert_eq!(controller.state(), RunState::Idle);

        thread::sleep(Duration::from_millis(50));
        assert!(!controller.poll());
        assert!(controller.output().is_empty());
        assert!(controller.error().is_empty());
    }

    #[test]
    fn test_toggle_reference_clears_outcome() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut controller = PlaygroundController::new(SnippetSession::new(
            "5",
            Some("42".to_string()),
        ));
        let sandbox = quick_sandbox(Vec::new());

        controller.run(&sandbox);
        assert!(wait_for_settle(&mut controller));
        assert_eq!(controller.output(), "5");

        controller.toggle_reference();
        assert_eq!(controller.state(), RunState::Idle);
        assert!(controller.output().is_empty());
        assert_eq!(controller.session().current_source(), "42");
    }

    #[test]
    fn test_reset_twice_equals_reset_once() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut controller = PlaygroundController::new(SnippetSession::new("default", None));
        controller.edit("changed");
        controller.reset();
        controller.reset();
        assert_eq!(controller.session().current_source(), "default");
        assert_eq!(controller.state(), RunState::Idle);
        assert!(controller.error().is_empty());
    }

    #[test]
    fn test_two_playgrounds_do_not_interfere() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut first = PlaygroundController::new(SnippetSession::new("first output", None));
        let mut second = PlaygroundController::new(SnippetSession::new("second source", None));
        let sandbox = quick_sandbox(Vec::new());

        first.run(&sandbox);
        assert!(wait_for_settle(&mut first));

        assert_eq!(first.output(), "first output");
        assert_eq!(second.state(), RunState::Idle);
        assert!(second.output().is_empty());
        assert_eq!(second.session().current_source(), "second source");
        assert!(!second.poll());
    }

    #[test]
    fn test_new_run_supersedes_older_one() {
        let _serial = crate::console::CAPTURE_TEST_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let mut controller = PlaygroundController::new(SnippetSession::new("slow", None));
        let slow = Arc::new(ExecutionSandbox::new(clean_services()).with_settle_ms(10_000));
        let fast = quick_sandbox(Vec::new());

        controller.run(&slow);
        controller.edit("fast");
        controller.run(&fast);
        assert!(wait_for_settle(&mut controller));

        // Only the newer run's outcome is ever applied; the slow one
        // aborts inside its settle wait.
        assert_eq!(controller.output(), "fast");
        assert_eq!(controller.state(), RunState::Succeeded);
    }
}
