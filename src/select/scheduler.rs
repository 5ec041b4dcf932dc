// Deferred commits and flag-clearing deadlines, fired from the host's tick.
// Time is always passed in; nothing here reads the clock.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::model::selection::{SelectMode, SelectOption, Selection};

/// What to do with an earlier pending commit when a new gesture targets the
/// same option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PendingCommits {
    /// Every gesture arms its own timer; earlier ones still fire.
    #[default]
    Independent,
    /// The earlier commit for that option is dropped.
    Supersede,
}

/// A value change waiting for its timer. Applied to whatever value the store
/// holds when the timer fires, not the value at gesture time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Commit {
    Deselect(SelectOption),
    Append(SelectOption),
    Remove(SelectOption),
    Clear,
}

impl Commit {
    pub fn target(&self) -> Option<&SelectOption> {
        match self {
            Commit::Deselect(op) | Commit::Append(op) | Commit::Remove(op) => Some(op),
            Commit::Clear => None,
        }
    }

    pub fn apply(&self, current: &Selection, mode: SelectMode) -> Selection {
        match self {
            Commit::Deselect(_) | Commit::Clear => Selection::empty(mode),
            Commit::Append(op) => current.with_appended(op.clone()),
            Commit::Remove(op) => current.without(op),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerKind {
    Commit(Commit),
    Settle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timer {
    pub due: Instant,
    seq: u64,
    pub kind: TimerKind,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    timers: Vec<Timer>,
    next_seq: u64,
}

impl Scheduler {
    pub fn schedule_commit(&mut self, commit: Commit, due: Instant, policy: PendingCommits) {
        if policy == PendingCommits::Supersede {
            if let Some(target) = commit.target() {
                let before = self.timers.len();
                self.timers.retain(|t| match &t.kind {
                    TimerKind::Commit(c) => !c.target().is_some_and(|o| o.same_as(target)),
                    TimerKind::Settle => true,
                });
                let dropped = before - self.timers.len();
                if dropped > 0 {
                    log::debug!("superseded {} pending commit(s) for {:?}", dropped, target.label);
                }
            }
        }
        self.push(due, TimerKind::Commit(commit));
    }

    pub fn schedule_settle(&mut self, due: Instant) {
        self.push(due, TimerKind::Settle);
    }

    /// Earliest timer with `due <= now`; ties fire in scheduling order.
    pub fn pop_due(&mut self, now: Instant) -> Option<Timer> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;
        Some(self.timers.remove(idx))
    }

    pub fn pending_commits(&self) -> usize {
        self.timers.iter().filter(|t| matches!(t.kind, TimerKind::Commit(_))).count()
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    fn push(&mut self, due: Instant, kind: TimerKind) {
        self.timers.push(Timer { due, seq: self.next_seq, kind });
        self.next_seq += 1;
    }
}
