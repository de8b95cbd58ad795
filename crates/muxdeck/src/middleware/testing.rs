//! Helpers for observing what a middleware dispatches

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

pub fn dispatcher() -> (Dispatcher, Receiver<Action>) {
    let (tx, rx) = mpsc::channel();
    (Dispatcher::new(tx), rx)
}

/// Everything dispatched so far
pub fn drain(rx: &Receiver<Action>) -> Vec<Action> {
    rx.try_iter().collect()
}

/// Collect dispatched actions until one matches `done`, or two seconds pass
pub fn collect_until(rx: &Receiver<Action>, done: impl Fn(&Action) -> bool) -> Vec<Action> {
    let deadline = Instant::now() + Duration::from_secs(2);
    let mut seen = Vec::new();
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match rx.recv_timeout(left) {
            Ok(action) => {
                let finished = done(&action);
                seen.push(action);
                if finished {
                    break;
                }
            }
            Err(_) => break,
        }
    }
    seen
}
