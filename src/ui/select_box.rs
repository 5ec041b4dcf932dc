// Select box: value line with chips / clear control / caret, and the option
// dropdown. Rendering also records where each clickable part landed.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::model::selection::{SelectOption, Selection};
use crate::select::{SelectBox, Target};

const PLACEHOLDER: &str = "Select…";
// " × │ ▾"
const CONTROLS_WIDTH: u16 = 6;

/// Screen regions of one rendered select box, newest frame only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectLayout {
    pub container: Rect,
    pub clear: Rect,
    pub chips: Vec<Rect>,
    /// Dropdown including its border; zero-sized when closed.
    pub list: Rect,
    pub options: Vec<(usize, Rect)>,
}

impl SelectLayout {
    /// Innermost target under the pointer. Dropdown rows win over the
    /// container because the dropdown is drawn on top.
    pub fn hit(&self, column: u16, row: u16) -> Option<Target> {
        let pos = Position::new(column, row);
        if let Some(i) = self.option_at(column, row) {
            return Some(Target::Option(i));
        }
        if self.list.contains(pos) {
            return Some(Target::Container);
        }
        if self.clear.contains(pos) {
            return Some(Target::Clear);
        }
        if let Some(i) = self.chips.iter().position(|r| r.contains(pos)) {
            return Some(Target::Chip(i));
        }
        self.container.contains(pos).then_some(Target::Container)
    }

    pub fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        let pos = Position::new(column, row);
        self.options.iter().find(|(_, r)| r.contains(pos)).map(|(i, _)| *i)
    }

    pub fn list_contains(&self, column: u16, row: u16) -> bool {
        self.list.contains(Position::new(column, row))
    }
}

/// Draw the closed part of the box (border, value, controls).
pub fn render_select_box(
    frame: &mut Frame,
    area: Rect,
    widget: &SelectBox,
    value: &Selection,
    title: &str,
    focused: bool,
) -> SelectLayout {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut layout = SelectLayout { container: area, ..Default::default() };
    if inner.width == 0 || inner.height == 0 {
        return layout;
    }

    let controls_x = inner.x + inner.width.saturating_sub(CONTROLS_WIDTH);
    let value_area = Rect::new(inner.x, inner.y, controls_x.saturating_sub(inner.x + 1), 1);
    let state = widget.state();
    let value_style = if state.exiting {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
    } else if state.entering {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::White)
    };

    match value {
        _ if value.is_empty() => {
            frame.render_widget(
                Paragraph::new(PLACEHOLDER).style(Style::default().fg(Color::DarkGray)),
                value_area,
            );
        }
        Selection::Single(op) => {
            let label = op.as_ref().map_or("", |o| o.label.as_str());
            frame.render_widget(Paragraph::new(label).style(value_style), value_area);
        }
        Selection::Multiple(ops) => {
            layout.chips = render_chips(frame, value_area, ops, value_style);
        }
    }

    let controls_area = Rect::new(controls_x, inner.y, CONTROLS_WIDTH.min(inner.width), 1);
    let caret = if state.is_open { "▴" } else { "▾" };
    let controls = Line::from(vec![
        Span::styled(" × ", Style::default().fg(Color::Red)),
        Span::styled("│", Style::default().fg(Color::DarkGray)),
        Span::styled(format!(" {}", caret), Style::default().fg(Color::Gray)),
    ]);
    frame.render_widget(Paragraph::new(controls), controls_area);
    layout.clear = Rect::new(controls_x, inner.y, 3.min(controls_area.width), 1);

    layout
}

/// One chip per selected option, in selection order. Chips that do not fit
/// are left out and an ellipsis marks the overflow.
fn render_chips(frame: &mut Frame, area: Rect, ops: &[SelectOption], style: Style) -> Vec<Rect> {
    let chip_style = style.bg(Color::Indexed(238));
    let mut rects = Vec::new();
    let mut spans = Vec::new();
    let mut x = area.x;
    let right = area.x.saturating_add(area.width);

    for (i, op) in ops.iter().enumerate() {
        let text = format!(" {} × ", op.label);
        let w = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let gap = u16::from(i > 0);
        // room for " …" unless this is the last chip
        let reserve: u16 = if i + 1 < ops.len() { 2 } else { 0 };
        let end = x.saturating_add(gap).saturating_add(w).saturating_add(reserve);
        if end > right {
            if x.saturating_add(gap) < right {
                spans.push(Span::raw(" ".repeat(gap as usize)));
                spans.push(Span::styled("…", Style::default().fg(Color::DarkGray)));
            }
            break;
        }
        if gap > 0 {
            spans.push(Span::raw(" "));
            x += gap;
        }
        rects.push(Rect::new(x, area.y, w, 1));
        spans.push(Span::styled(text, chip_style));
        x += w;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
    rects
}

/// Draw the option list below `layout.container`, clipped to `bounds`, and
/// record its rows in `layout`. Does nothing while closed.
pub fn render_dropdown(
    frame: &mut Frame,
    bounds: Rect,
    layout: &mut SelectLayout,
    widget: &SelectBox,
    value: &Selection,
) {
    layout.list = Rect::default();
    layout.options.clear();

    let options = widget.options();
    if !widget.is_open() || options.is_empty() {
        return;
    }

    let top = layout.container.y + layout.container.height;
    let bottom = bounds.y + bounds.height;
    let max_rows = bottom.saturating_sub(top).saturating_sub(2) as usize;
    let rows = options.len().min(max_rows);
    if rows == 0 {
        return;
    }

    let list = Rect::new(layout.container.x, top, layout.container.width, rows as u16 + 2);
    frame.render_widget(Clear, list);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(list);
    frame.render_widget(block, list);

    let highlighted = widget.highlighted();
    let offset = visible_offset(highlighted.min(options.len() - 1), rows);

    let mut lines = Vec::with_capacity(rows);
    for (row, (i, op)) in options.iter().enumerate().skip(offset).take(rows).enumerate() {
        let selected = value.contains(op);
        let mark = if selected { "✓" } else { " " };
        let label = format!(" {} {}", mark, op.label);
        let number = format!("{} ", op.value);
        let pad = (inner.width as usize).saturating_sub(label.chars().count() + number.chars().count());

        let base = if i == highlighted {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else if selected {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(label, base),
            Span::styled(" ".repeat(pad), base),
            Span::styled(number, base.fg(if i == highlighted { Color::Black } else { Color::DarkGray })),
        ]));
        layout.options.push((i, Rect::new(inner.x, inner.y + row as u16, inner.width, 1)));
    }

    frame.render_widget(Paragraph::new(lines), inner);
    layout.list = list;
}

/// First visible row so that `highlighted` stays on screen.
fn visible_offset(highlighted: usize, rows: usize) -> usize {
    if rows == 0 {
        return 0;
    }
    highlighted.saturating_sub(rows - 1)
}
