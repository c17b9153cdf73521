// src/import/job.rs
//
// Runs one ImportSource on a worker thread. The worker never sees the
// session: it only posts events, and whoever owns the session drains them
// in order (`poll`) and applies the result.
use std::{
    sync::{mpsc, Arc},
    thread,
};

use crate::{error::ImportError, progress::Progress};

use super::{ImportOutput, ImportSource};

pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Debug)]
pub enum ImportEvent {
    Status(String),
    Finished(ImportOutput),
    Failed(ImportError),
}

/// Progress sink that forwards status lines over the job channel.
struct ChannelProgress {
    tx: mpsc::Sender<ImportEvent>,
    waker: Waker,
    done: usize,
    total: usize,
}

impl ChannelProgress {
    fn send(&self, msg: String) {
        let _ = self.tx.send(ImportEvent::Status(msg));
        (self.waker)();
    }
}

impl Progress for ChannelProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        self.send(s!(msg));
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        self.send(format!("Fetched {label} ({}/{})", self.done, self.total));
    }
    fn item_failed(&mut self, label: &str, reason: &str) {
        self.done += 1;
        self.send(format!("Skipped {label} ({}/{}): {reason}", self.done, self.total));
    }
}

pub struct ImportJob {
    label: &'static str,
    rx: mpsc::Receiver<ImportEvent>,
    finished: bool,
}

impl ImportJob {
    /// Start `source` on its own thread. `waker` is called after every
    /// event so a UI can repaint and drain.
    pub fn spawn<W>(source: Box<dyn ImportSource>, waker: W) -> Self
    where
        W: Fn() + Send + Sync + 'static,
    {
        let label = source.label();
        let (tx, rx) = mpsc::channel::<ImportEvent>();
        let waker: Waker = Arc::new(waker);

        logf!("Import: spawn {label}");
        thread::spawn(move || {
            let mut progress = ChannelProgress { tx: tx.clone(), waker: Arc::clone(&waker), done: 0, total: 0 };
            let event = match source.collect(Some(&mut progress)) {
                Ok(out) => ImportEvent::Finished(out),
                Err(e) => {
                    loge!("Import: {label} failed: {e}");
                    ImportEvent::Failed(e)
                }
            };
            let _ = tx.send(event);
            waker();
        });

        Self { label, rx, finished: false }
    }

    #[inline] pub fn label(&self) -> &'static str { self.label }
    #[inline] pub fn is_finished(&self) -> bool { self.finished }

    /// Next pending event without blocking. A worker that died without
    /// reporting shows up once as `Failed(Disconnected)`.
    pub fn poll(&mut self) -> Option<ImportEvent> {
        if self.finished {
            return None;
        }
        match self.rx.try_recv() {
            Ok(ev) => {
                if matches!(ev, ImportEvent::Finished(_) | ImportEvent::Failed(_)) {
                    self.finished = true;
                }
                Some(ev)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.finished = true;
                Some(ImportEvent::Failed(ImportError::Disconnected))
            }
        }
    }

    /// Block until the job ends, discarding status lines.
    pub fn wait(self) -> Result<ImportOutput, ImportError> {
        while !self.finished {
            match self.rx.recv() {
                Ok(ImportEvent::Status(_)) => {}
                Ok(ImportEvent::Finished(out)) => return Ok(out),
                Ok(ImportEvent::Failed(e)) => return Err(e),
                Err(_) => return Err(ImportError::Disconnected),
            }
        }
        Err(ImportError::Disconnected)
    }
}
