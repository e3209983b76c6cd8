//! Process-wide console tee. During a run the sandbox redirects captured
//! program output here; the host's own sink keeps receiving every line, so
//! running one playground never silences the rest of the application.

use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::mpsc::Sender;

static CAPTURE_SLOT: Mutex<Option<Sender<String>>> = Mutex::new(None);

/// Scoped redirection of the capture slot. Dropping the guard restores the
/// previous occupant on every exit path, including unwinding.
pub struct CaptureGuard {
    previous: Option<Sender<String>>,
}

pub fn redirect(sender: Sender<String>) -> CaptureGuard {
    let mut slot = CAPTURE_SLOT.lock().unwrap_or_else(PoisonError::into_inner);
    let previous = slot.replace(sender);
    CaptureGuard { previous }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        let mut slot = CAPTURE_SLOT.lock().unwrap_or_else(PoisonError::into_inner);
        *slot = self.previous.take();
    }
}

/// Emits one console line: into the active capture, if any, and always to
/// the host sink.
pub fn emit(line: &str) {
    {
        let slot = CAPTURE_SLOT.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(sender) = slot.as_ref() {
            let _ = sender.send(line.to_string());
        }
    }
    println!("{line}");
}

/// The capture slot is process-global, so every test that redirects it
/// (here, in the sandbox, in the controller) serializes on this lock to
/// avoid cross-talk under the parallel test runner.
#[cfg(test)]
pub(crate) static CAPTURE_TEST_LOCK: Mutex<()> = Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    use super::CAPTURE_TEST_LOCK as TEST_LOCK;

    #[test]
    fn test_emit_reaches_active_capture() {
        let _serial = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let (sender, receiver) = channel();
        {
            let _guard = redirect(sender);
            emit("hello");
            emit("world");
        }
        let lines: Vec<String> = receiver.try_iter().collect();
        assert_eq!(lines, vec!["hello".to_string(), "world".to_string()]);
    }

    #[test]
    fn test_emit_without_capture_is_silent_to_channels() {
        let _serial = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let (sender, receiver) = channel();
        {
            let _guard = redirect(sender);
        }
        emit("after restore");
        assert!(receiver.try_iter().next().is_none());
    }

    #[test]
    fn test_nested_redirect_restores_outer_capture() {
        let _serial = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let (outer_tx, outer_rx) = channel();
        let (inner_tx, inner_rx) = channel();

        let _outer = redirect(outer_tx);
        {
            let _inner = redirect(inner_tx);
            emit("inner line");
        }
        emit("outer line");

        assert_eq!(
            inner_rx.try_iter().collect::<Vec<_>>(),
            vec!["inner line".to_string()]
        );
        assert_eq!(
            outer_rx.try_iter().collect::<Vec<_>>(),
            vec!["outer line".to_string()]
        );
    }

    #[test]
    fn test_capture_restored_after_panic() {
        let _serial = TEST_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
        let (sender, _receiver) = channel();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = redirect(sender);
            panic!("boom");
        }));
        assert!(result.is_err());

        // The slot must be empty again after the unwind.
        let (probe_tx, probe_rx) = channel();
        {
            let _guard = redirect(probe_tx);
            emit("probe");
        }
        assert_eq!(
            probe_rx.try_iter().collect::<Vec<_>>(),
            vec!["probe".to_string()]
        );
        emit("unseen");
        assert!(probe_rx.try_iter().next().is_none());
    }
}
