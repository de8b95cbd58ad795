//! Execution controller
//!
//! Runs one palette entry at a time. While an entry runs its id is reported
//! by [`ExecutionController::in_flight`]; the marker is cleared when the run
//! settles, whether it succeeded or not.

use super::entry::PaletteEntry;
use crate::workspace::{GitViewStore, WorkspaceStore};
use std::sync::{Arc, Mutex, MutexGuard};

/// Everything an entry needs to run
#[derive(Clone)]
pub struct ExecutionContext {
    pub store: Arc<dyn WorkspaceStore>,
    pub git: Arc<dyn GitViewStore>,
    /// Host effect for the "create workspace" entry
    pub open_workspace_modal: Arc<dyn Fn() + Send + Sync>,
}

/// The entry currently running and the palette session that started it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InFlight {
    pub id: String,
    pub session: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{running}\" is still running")]
pub struct ExecutionRefused {
    pub running: String,
}

/// Outcome of one run, tagged with the session it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    pub id: String,
    pub label: String,
    pub session: u64,
    pub outcome: Result<(), String>,
}

/// Single-flight gate for palette executions
#[derive(Clone, Default)]
pub struct ExecutionController {
    current: Arc<Mutex<Option<InFlight>>>,
}

impl ExecutionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the gate for `entry`, or refuse while another entry runs
    pub fn begin(&self, entry: &PaletteEntry, session: u64) -> Result<Execution, ExecutionRefused> {
        let mut current = lock(&self.current);
        if let Some(running) = current.as_ref() {
            return Err(ExecutionRefused {
                running: running.id.clone(),
            });
        }
        *current = Some(InFlight {
            id: entry.id.clone(),
            session,
        });

        Ok(Execution {
            entry: entry.clone(),
            session,
            guard: InFlightGuard {
                current: Arc::clone(&self.current),
            },
        })
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> Option<InFlight> {
        lock(&self.current).clone()
    }
}

fn lock(current: &Mutex<Option<InFlight>>) -> MutexGuard<'_, Option<InFlight>> {
    current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Clears the in-flight marker when dropped
struct InFlightGuard {
    current: Arc<Mutex<Option<InFlight>>>,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        *lock(&self.current) = None;
    }
}

/// A claimed execution, ready to run
pub struct Execution {
    entry: PaletteEntry,
    session: u64,
    guard: InFlightGuard,
}

impl Execution {
    pub fn id(&self) -> &str {
        &self.entry.id
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Run the entry; the gate is released before the report is returned
    pub async fn run(self, ctx: &ExecutionContext) -> ExecutionReport {
        let Execution {
            entry,
            session,
            guard,
        } = self;

        log::info!("Running palette entry {} ({})", entry.id, entry.label);
        let outcome = entry.action.run(ctx).await.map_err(|e| format!("{:#}", e));
        drop(guard);

        if let Err(message) = &outcome {
            log::error!("Palette entry {} failed: {}", entry.id, message);
        }

        ExecutionReport {
            id: entry.id,
            label: entry.label,
            session,
            outcome,
        }
    }
}
