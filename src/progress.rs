// src/progress.rs
/// Lightweight progress reporting for imports (network fetch + parse).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One page/lookup finished.
    fn item_done(&mut self, _label: &str) {}

    /// One page/lookup failed; the import carries on without it.
    fn item_failed(&mut self, _label: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Writes status lines to stderr (CLI).
pub struct StderrProgress {
    done: usize,
    total: usize,
}

impl StderrProgress {
    pub fn new() -> Self { Self { done: 0, total: 0 } }
}

impl Default for StderrProgress {
    fn default() -> Self { Self::new() }
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("Fetched {label} ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.done += 1;
        eprintln!("Skipped {label} ({}/{}): {reason}", self.done, self.total);
    }
}
