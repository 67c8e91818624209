use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, trace};

/// A unit of work queued for the UI thread.
type Task = Box<dyn FnOnce() + Send + 'static>;

/// Queue entries processed by the UI run loop.
enum Directive {
    /// Execute one task.
    Run(Task),
    /// Exit the loop once every earlier entry has been processed.
    Stop,
}

/// The UI thread's task pump.
///
/// Owns the receive side of an unbounded directive queue and executes
/// tasks strictly in submission order. Tasks submitted by a single thread
/// therefore run on the UI thread in exactly the order they were sent.
pub struct UiRunLoop {
    /// Receive side of the directive queue.
    rx: Receiver<Directive>,
}

/// Cloneable submit/stop handle for the UI run loop.
#[derive(Clone)]
pub struct UiHandle {
    /// Send side of the directive queue.
    tx: Sender<Directive>,
}

impl UiRunLoop {
    /// Create a run loop and a handle feeding it.
    pub fn new() -> (Self, UiHandle) {
        let (tx, rx) = unbounded();
        (Self { rx }, UiHandle { tx })
    }

    /// Process queued tasks until a stop directive arrives.
    ///
    /// Blocks the calling thread; that thread becomes the UI execution
    /// context for the lifetime of the loop.
    pub fn run(self) {
        debug!("ui_loop_started");
        for directive in self.rx.iter() {
            match directive {
                Directive::Run(task) => task(),
                Directive::Stop => break,
            }
        }
        debug!("ui_loop_exited");
    }
}

impl UiHandle {
    /// Queue a task for the UI thread and return immediately.
    ///
    /// Fire-and-forget: there is no completion signal. Submitting after
    /// the loop has exited is a safe no-op.
    pub fn submit<F>(&self, task: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.tx.send(Directive::Run(Box::new(task))).is_err() {
            trace!("ui_loop_gone_dropping_task");
        }
    }

    /// Ask the loop to exit after the tasks queued so far have run.
    ///
    /// Idempotent; extra stop requests are absorbed by the closed queue.
    pub fn stop(&self) {
        if self.tx.send(Directive::Stop).is_err() {
            trace!("ui_loop_already_stopped");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        thread,
    };

    use super::*;

    #[test]
    fn tasks_run_in_submission_order() {
        let (rl, handle) = UiRunLoop::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let ui = thread::spawn(move || rl.run());
        for i in 0..100 {
            let seen = seen.clone();
            handle.submit(move || seen.lock().unwrap().push(i));
        }
        handle.stop();
        ui.join().unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(*seen, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn stop_runs_previously_queued_tasks_first() {
        let (rl, handle) = UiRunLoop::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let seen = seen.clone();
            handle.submit(move || seen.lock().unwrap().push(i));
        }
        handle.stop();
        rl.run();

        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn submit_after_exit_is_a_noop() {
        let (rl, handle) = UiRunLoop::new();
        handle.stop();
        rl.run();

        // The loop is gone; these must not panic or block.
        handle.submit(|| panic!("must never run"));
        handle.stop();
    }
}
