// Select box interaction core: visibility, keyboard navigation, selection
// mutation with delayed commits, and animation flag reconciliation.
//
// The widget never holds the selection. Callers pass a `SelectionStore` into
// every call that may commit; the store is the single place values change.

pub mod scheduler;
pub mod state;

use std::time::{Duration, Instant};

use crate::model::selection::{SelectMode, SelectOption, Selection};
use scheduler::{Commit, Scheduler, TimerKind};
pub use scheduler::PendingCommits;
pub use state::{HighlightBound, InteractionState};

/// Externally owned selection value plus its change callback.
pub trait SelectionStore {
    fn value(&self) -> &Selection;
    fn commit(&mut self, value: Selection);
}

/// A bare value is the simplest store: commits overwrite it.
impl SelectionStore for Selection {
    fn value(&self) -> &Selection {
        self
    }

    fn commit(&mut self, value: Selection) {
        *self = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectConfig {
    pub commit_delay: Duration,
    pub settle_delay: Duration,
    pub highlight_bound: HighlightBound,
    pub pending_commits: PendingCommits,
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            commit_delay: Duration::from_millis(400),
            settle_delay: Duration::from_millis(500),
            highlight_bound: HighlightBound::default(),
            pending_commits: PendingCommits::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    Other,
}

/// Where a pointer or keyboard event landed inside the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Container,
    Option(usize),
    Chip(usize),
    Clear,
}

#[derive(Debug)]
pub struct SelectBox {
    options: Vec<SelectOption>,
    mode: SelectMode,
    config: SelectConfig,
    state: InteractionState,
    scheduler: Scheduler,
    observed: Option<Selection>,
}

impl SelectBox {
    pub fn new(options: Vec<SelectOption>, mode: SelectMode, config: SelectConfig) -> Self {
        Self {
            options,
            mode,
            config,
            state: InteractionState::default(),
            scheduler: Scheduler::default(),
            observed: None,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn mode(&self) -> SelectMode {
        self.mode
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn highlighted(&self) -> usize {
        self.state.highlighted
    }

    pub fn pending_commits(&self) -> usize {
        self.scheduler.pending_commits()
    }

    /// No commit or flag-clearing timer is waiting.
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    // ── Visibility ───────────────────────────────────────────────────────────

    /// Focus loss always closes.
    pub fn blur(&mut self) {
        if self.state.is_open {
            log::debug!("blur: closing");
        }
        self.state.set_open(false);
    }

    pub fn hover(&mut self, index: usize) {
        if self.state.is_open && index < self.options.len() {
            self.state.highlighted = index;
        }
    }

    // ── Pointer ──────────────────────────────────────────────────────────────

    /// Inner targets consume the click; only a bare container click toggles.
    pub fn click<S: SelectionStore>(&mut self, target: Target, store: &mut S, now: Instant) {
        match target {
            Target::Container => {
                self.state.toggle();
                log::debug!("click: open={}", self.state.is_open);
            }
            Target::Option(i) => {
                if let Some(op) = self.options.get(i).cloned() {
                    self.select(&op, store, now);
                }
            }
            Target::Chip(i) => {
                if let Some(op) = store.value().items().get(i).cloned() {
                    self.state.exiting = true;
                    self.select(&op, store, now);
                }
            }
            Target::Clear => self.clear(now),
        }
    }

    // ── Keyboard ─────────────────────────────────────────────────────────────

    /// Only keys aimed at the container itself count.
    pub fn key<S: SelectionStore>(&mut self, key: Key, target: Target, store: &mut S, now: Instant) {
        if target != Target::Container {
            return;
        }
        match key {
            Key::Enter | Key::Space => {
                let was_open = self.state.is_open;
                let highlighted = self.state.highlighted;
                self.state.toggle();
                if was_open {
                    match self.options.get(highlighted).cloned() {
                        Some(op) => self.select(&op, store, now),
                        None => log::warn!(
                            "highlight {} is past the last option ({}), nothing to commit",
                            highlighted,
                            self.options.len()
                        ),
                    }
                }
            }
            Key::ArrowDown | Key::ArrowUp => {
                if !self.state.is_open {
                    self.state.set_open(true);
                    return;
                }
                let down = key == Key::ArrowDown;
                if self.state.step_highlight(down, self.options.len(), self.config.highlight_bound) {
                    log::trace!("highlight -> {}", self.state.highlighted);
                }
            }
            Key::Other => {}
        }
    }

    // ── Selection mutation ───────────────────────────────────────────────────

    /// Add or remove `op` depending on whether the current value holds it.
    /// A single-mode add commits at once; everything else waits for the
    /// exit/enter animation.
    pub fn select<S: SelectionStore>(&mut self, op: &SelectOption, store: &mut S, now: Instant) {
        let selected = store.value().contains(op);
        match (self.mode, selected) {
            (SelectMode::Single, false) => {
                log::debug!("select {:?}: commit now", op.label);
                store.commit(Selection::Single(Some(op.clone())));
                self.state.entering = true;
                self.state.set_open(false);
                self.settled_on(store.value(), now);
            }
            (SelectMode::Single, true) => {
                self.state.exiting = true;
                self.schedule(Commit::Deselect(op.clone()), now);
            }
            (SelectMode::Multiple, true) => {
                self.state.exiting = true;
                self.schedule(Commit::Remove(op.clone()), now);
            }
            (SelectMode::Multiple, false) => {
                self.state.entering = true;
                self.schedule(Commit::Append(op.clone()), now);
            }
        }
    }

    /// Empties the value after the exit animation. Open state is untouched.
    pub fn clear(&mut self, now: Instant) {
        self.state.exiting = true;
        self.schedule(Commit::Clear, now);
    }

    // ── Timers & reconciliation ──────────────────────────────────────────────

    /// Re-arms the flag-clearing timer whenever the store's value differs
    /// from the last one seen, whoever changed it.
    pub fn observe(&mut self, value: &Selection, now: Instant) {
        if self.observed.as_ref() == Some(value) {
            return;
        }
        if value.mode() != self.mode {
            log::warn!("value shape {:?} does not match widget mode {:?}", value.mode(), self.mode);
        }
        self.settled_on(value, now);
    }

    /// Observe external changes, then fire every timer that is due, oldest
    /// first. A commit lands at its own due time, so the settle timer it arms
    /// may already be due within the same call.
    pub fn tick<S: SelectionStore>(&mut self, store: &mut S, now: Instant) {
        self.observe(store.value(), now);
        while let Some(timer) = self.scheduler.pop_due(now) {
            match timer.kind {
                TimerKind::Commit(commit) => {
                    let next = commit.apply(store.value(), self.mode);
                    log::debug!("commit {:?} -> {}", commit, next.summary());
                    store.commit(next);
                    self.settled_on(store.value(), timer.due);
                }
                TimerKind::Settle => self.state.clear_flags(),
            }
        }
    }

    fn schedule(&mut self, commit: Commit, now: Instant) {
        log::debug!("schedule {:?} in {:?}", commit, self.config.commit_delay);
        self.scheduler
            .schedule_commit(commit, now + self.config.commit_delay, self.config.pending_commits);
    }

    fn settled_on(&mut self, value: &Selection, at: Instant) {
        self.observed = Some(value.clone());
        self.scheduler.schedule_settle(at + self.config.settle_delay);
    }
}
