use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::time::{Duration, Instant};

/// Tracks the live run generation of one playground. Every run, reset or
/// reference toggle advances the generation; a worker holding an older
/// generation is superseded and its eventual outcome must be discarded.
/// Advancing also wakes workers sleeping in [`RunControl::wait_settle`].
pub struct RunControl {
    generation: Arc<AtomicU64>,
    gate: Arc<(Mutex<()>, Condvar)>,
}

impl RunControl {
    pub fn new() -> Self {
        Self {
            generation: Arc::new(AtomicU64::new(0)),
            gate: Arc::new((Mutex::new(()), Condvar::new())),
        }
    }

    pub fn current(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Starts a new generation and returns it.
    pub fn advance(&self) -> u64 {
        let next = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let (_, condvar) = &*self.gate;
        condvar.notify_all();
        next
    }

    pub fn is_current(&self, seq: u64) -> bool {
        self.current() == seq
    }

    /// Sleeps up to `ms` milliseconds while `seq` is still the live
    /// generation. Returns false as soon as a newer generation supersedes
    /// this one, true once the full delay elapsed uncontested.
    pub fn wait_settle(&self, ms: u64, seq: u64) -> bool {
        let deadline = Instant::now() + Duration::from_millis(ms);
        let (lock, condvar) = &*self.gate;
        let mut guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        loop {
            if !self.is_current(seq) {
                return false;
            }
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            let (next_guard, _timeout) = condvar
                .wait_timeout(guard, deadline - now)
                .unwrap_or_else(PoisonError::into_inner);
            guard = next_guard;
        }
    }
}

impl Clone for RunControl {
    fn clone(&self) -> Self {
        Self {
            generation: Arc::clone(&self.generation),
            gate: Arc::clone(&self.gate),
        }
    }
}

impl Default for RunControl {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_advance_is_monotonic() {
        let control = RunControl::new();
        let first = control.advance();
        let second = control.advance();
        assert!(second > first);
        assert!(control.is_current(second));
        assert!(!control.is_current(first));
    }

    #[test]
    fn test_wait_settle_completes_when_uncontested() {
        let control = RunControl::new();
        let seq = control.advance();
        assert!(control.wait_settle(5, seq));
    }

    #[test]
    fn test_wait_settle_aborts_when_superseded() {
        let control = RunControl::new();
        let seq = control.advance();

        let waiter = control.clone();
        let handle = thread::spawn(move || waiter.wait_settle(5_000, seq));

        thread::sleep(Duration::from_millis(20));
        control.advance();

        assert!(!handle.join().expect("waiter thread panicked"));
    }

    #[test]
    fn test_stale_seq_returns_immediately() {
        let control = RunControl::new();
        let old = control.advance();
        control.advance();

        let started = Instant::now();
        assert!(!control.wait_settle(5_000, old));
        assert!(started.elapsed() < Duration::from_millis(1_000));
    }
}
