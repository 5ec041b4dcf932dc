// Host application: owns the selection values, routes input to the focused
// select box and advances every box's timers.
// ref: ratatui app patterns — https://ratatui.rs/concepts/application-patterns/

use std::time::{Duration, Instant};

use anyhow::Result;

use crate::{
    action::Action,
    config::global::GlobalConfig,
    event::poll_event,
    model::selection::{SelectMode, Selection},
    select::{Key, SelectBox, Target},
    tui::Tui,
    ui::{self, select_box::SelectLayout},
};

const TICK_MS: u64 = 50;
const IDLE_TICK_MS: u64 = 250;

/// One select box together with the value it controls.
pub struct Field {
    pub title: &'static str,
    pub widget: SelectBox,
    pub value: Selection,
    pub layout: SelectLayout,
}

impl Field {
    fn new(title: &'static str, widget: SelectBox, value: Selection) -> Self {
        Self { title, widget, value, layout: SelectLayout::default() }
    }
}

pub struct App {
    pub fields: Vec<Field>,
    pub focused: Option<usize>,
}

impl App {
    pub fn new(config: &GlobalConfig) -> Self {
        let options = config.options.clone();
        let widget_config = config.widget();
        let first = options.first().cloned();

        let single = Field::new(
            "Single",
            SelectBox::new(options.clone(), SelectMode::Single, widget_config),
            Selection::Single(first),
        );
        let multiple = Field::new(
            "Multiple",
            SelectBox::new(options, SelectMode::Multiple, widget_config),
            Selection::empty(SelectMode::Multiple),
        );

        Self { fields: vec![single, multiple], focused: Some(0) }
    }

    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            self.tick(Instant::now());
            terminal.draw(|frame| ui::render(frame, self))?;

            if let Some(action) = poll_event(self.poll_timeout())? {
                if action == Action::Quit {
                    break;
                }
                self.dispatch(action, Instant::now());
            }
        }
        log::info!("quit");
        Ok(())
    }

    pub fn tick(&mut self, now: Instant) {
        for field in &mut self.fields {
            field.widget.tick(&mut field.value, now);
        }
    }

    /// Poll fast while any box has a timer waiting so commits land on time.
    pub fn poll_timeout(&self) -> Duration {
        if self.fields.iter().all(|f| f.widget.is_idle()) {
            Duration::from_millis(IDLE_TICK_MS)
        } else {
            Duration::from_millis(TICK_MS)
        }
    }

    pub fn focused_mode(&self) -> Option<SelectMode> {
        self.focused.and_then(|i| self.fields.get(i)).map(|f| f.widget.mode())
    }

    /// Commits the focused box still has waiting on their timers.
    pub fn focused_pending(&self) -> usize {
        self.focused
            .and_then(|i| self.fields.get(i))
            .map_or(0, |f| f.widget.pending_commits())
    }

    // ── Action dispatch ───────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action, now: Instant) {
        match action {
            Action::FocusNext => {
                let next = self.focused.map_or(0, |i| (i + 1) % self.fields.len());
                self.focus(Some(next));
            }
            Action::FocusPrev => {
                let n = self.fields.len();
                let prev = self.focused.map_or(n - 1, |i| (i + n - 1) % n);
                self.focus(Some(prev));
            }
            Action::Key(key) => self.key(key, now),
            Action::Click { column, row } => self.click(column, row, now),
            Action::Hover { column, row } => self.hover(column, row),
            Action::Blur => {
                for field in &mut self.fields {
                    field.widget.blur();
                }
            }
            Action::Quit | Action::None => {}
        }
    }

    /// Move focus; the box losing it is blurred.
    fn focus(&mut self, idx: Option<usize>) {
        if self.focused == idx {
            return;
        }
        if let Some(field) = self.focused.and_then(|i| self.fields.get_mut(i)) {
            field.widget.blur();
        }
        self.focused = idx;
    }

    fn key(&mut self, key: Key, now: Instant) {
        let Some(Field { widget, value, .. }) = self.focused.and_then(|i| self.fields.get_mut(i)) else {
            return;
        };
        widget.key(key, Target::Container, value, now);
    }

    fn click(&mut self, column: u16, row: u16, now: Instant) {
        match self.hit(column, row) {
            Some((idx, target)) => {
                self.focus(Some(idx));
                let Field { widget, value, .. } = &mut self.fields[idx];
                widget.click(target, value, now);
            }
            None => self.focus(None),
        }
    }

    fn hover(&mut self, column: u16, row: u16) {
        for field in &mut self.fields {
            if let Some(i) = field.layout.option_at(column, row) {
                field.widget.hover(i);
            }
        }
    }

    /// Open dropdowns sit on top of the other boxes, so they are checked first.
    fn hit(&self, column: u16, row: u16) -> Option<(usize, Target)> {
        let in_list = self
            .fields
            .iter()
            .position(|f| f.layout.list_contains(column, row));
        if let Some(idx) = in_list {
            return self.fields[idx].layout.hit(column, row).map(|t| (idx, t));
        }
        self.fields
            .iter()
            .enumerate()
            .find_map(|(i, f)| f.layout.hit(column, row).map(|t| (i, t)))
    }
}
