//! Numeric variable storage shared with collaborator scripts, plus the
//! scheduled return of resolved choice results to the idle sentinel.
//! Ids at or below zero mean "no storage requested" and are never written.

use std::collections::BTreeMap;

use crate::types::{IDLE_SENTINEL, LogEvent, RESULT_GRACE_TICKS};

/// Scheduled write of the idle sentinel. A newer session that claims the
/// same variable discards the entry, so a stale reset can never clobber it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingReset {
    variable: i32,
    due_tick: u64,
}

#[derive(Default)]
pub struct Variables {
    values: BTreeMap<i32, i32>,
    pending_resets: Vec<PendingReset>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unset slots read as the idle sentinel.
    pub fn get(&self, id: i32) -> i32 {
        self.values.get(&id).copied().unwrap_or(IDLE_SENTINEL)
    }

    pub fn set(&mut self, id: i32, value: i32) {
        if id <= 0 {
            return;
        }
        self.values.insert(id, value);
    }

    /// Schedule the grace-window reset of `variable` back to the idle
    /// sentinel, `RESULT_GRACE_TICKS` after `now`.
    pub fn schedule_reset(&mut self, variable: i32, now: u64) {
        if variable <= 0 {
            return;
        }
        self.pending_resets.push(PendingReset { variable, due_tick: now + RESULT_GRACE_TICKS });
    }

    /// Drop any pending reset for `variable`. Called when a newer session
    /// claims the slot; returns whether a stale reset was discarded.
    pub fn supersede_reset(&mut self, variable: i32) -> bool {
        let before = self.pending_resets.len();
        self.pending_resets.retain(|reset| reset.variable != variable);
        self.pending_resets.len() != before
    }

    /// Apply every reset whose due tick has arrived.
    pub fn apply_due_resets(&mut self, tick: u64, log: &mut Vec<LogEvent>) {
        let mut index = 0;
        while index < self.pending_resets.len() {
            if self.pending_resets[index].due_tick <= tick {
                let reset = self.pending_resets.remove(index);
                self.values.insert(reset.variable, IDLE_SENTINEL);
                log.push(LogEvent::ResultCleared { variable: reset.variable });
            } else {
                index += 1;
            }
        }
    }

    /// Deterministic view of every slot ever written, for snapshot hashing.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.values.iter().map(|(&id, &value)| (id, value))
    }

    pub fn pending_reset_count(&self) -> usize {
        self.pending_resets.len()
    }
}
