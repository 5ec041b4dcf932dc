// Layout orchestration

pub mod select_box;

use crate::app::App;
use crate::model::selection::SelectMode;
use crate::ui::select_box::{render_dropdown, render_select_box, SelectLayout};
use ratatui::{prelude::*, widgets::Paragraph};

const BOX_WIDTH: u16 = 44;
const BOX_HEIGHT: u16 = 3;
const BOX_GAP: u16 = 2;

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let sb_height = status_bar_height(app, area.width);
    let main_area = Rect::new(
        area.x,
        area.y,
        area.width,
        area.height.saturating_sub(sb_height),
    );
    let status_area = Rect::new(
        area.x,
        area.y + area.height.saturating_sub(sb_height),
        area.width,
        sb_height,
    );

    render_header(frame, Rect::new(main_area.x, main_area.y, main_area.width, 1), app);

    let width = main_area.width.saturating_sub(4).min(BOX_WIDTH);
    let bottom = main_area.y + main_area.height;
    let focused = app.focused;
    for (i, field) in app.fields.iter_mut().enumerate() {
        let y = main_area.y + 1 + i as u16 * (BOX_HEIGHT + BOX_GAP);
        if y + BOX_HEIGHT > bottom {
            field.layout = SelectLayout::default();
            continue;
        }
        let rect = Rect::new(main_area.x + 2, y, width, BOX_HEIGHT);
        field.layout =
            render_select_box(frame, rect, &field.widget, &field.value, field.title, focused == Some(i));
    }

    // Dropdowns last so they cover the boxes below them
    for field in &mut app.fields {
        if field.layout.container.height > 0 {
            render_dropdown(frame, main_area, &mut field.layout, &field.widget, &field.value);
        }
    }

    render_status_bar(frame, status_area, app);
}

/// Title plus the externally held value of every box.
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(" selectbox ", Style::default().fg(Color::Cyan).bold())];
    for field in &app.fields {
        spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(format!("{}: ", field.title), Style::default().fg(Color::Gray)));
        spans.push(Span::styled(field.value.summary(), Style::default().fg(Color::White)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn get_mode_label(app: &App) -> &'static str {
    match app.focused_mode() {
        Some(SelectMode::Single) => "SINGLE",
        Some(SelectMode::Multiple) => "MULTIPLE",
        None => "NONE",
    }
}

fn build_hints(app: &App) -> String {
    let global = "(Tab) focus  ·  (q)uit";
    let hints = match app.focused_mode() {
        Some(SelectMode::Single) => format!(
            "(Enter/Space) open / pick  (↑↓) move  ·  click ×: clear  ·  {}",
            global
        ),
        Some(SelectMode::Multiple) => format!(
            "(Enter/Space) open / toggle  (↑↓) move  ·  click chip: remove  click ×: clear  ·  {}",
            global
        ),
        None => global.to_string(),
    };
    match app.focused_pending() {
        0 => hints,
        n => format!("{} pending  ·  {}", n, hints),
    }
}

// Split hints at "  ·  " scope separators to fit within `available_width` chars per line.
fn wrap_hints(hints: &str, available_width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for group in hints.split("  ·  ") {
        if current.is_empty() {
            current = group.to_string();
            continue;
        }
        let candidate = format!("{}  {}", current, group);
        if candidate.chars().count() <= available_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, group.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn status_bar_height(app: &App, width: u16) -> u16 {
    let badge_width = get_mode_label(app).len() + 4; // " [LABEL] "
    let available = (width as usize).saturating_sub(badge_width + 1);
    let lines = wrap_hints(&build_hints(app), available);
    (lines.len() as u16).max(1)
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mode_text = format!(" [{}] ", get_mode_label(app));
    let badge_width = mode_text.len();
    let badge_style = Style::default().fg(Color::Black).bg(Color::Yellow).bold();
    let hint_style = Style::default().fg(Color::Gray);
    let ver = concat!(" v", env!("CARGO_PKG_VERSION"), " ");
    let ver_style = Style::default().fg(Color::DarkGray);

    let available = (area.width as usize).saturating_sub(badge_width + 1);
    let hint_lines = wrap_hints(&build_hints(app), available);
    let last = hint_lines.len().saturating_sub(1);
    let indent = " ".repeat(badge_width);

    let lines: Vec<Line> = hint_lines
        .iter()
        .enumerate()
        .map(|(i, hl)| {
            let left = format!(" {}", hl);
            let mut spans = if i == 0 {
                vec![Span::styled(mode_text.clone(), badge_style)]
            } else {
                vec![Span::raw(indent.clone())]
            };
            let left_len = badge_width + left.chars().count();
            spans.push(Span::styled(left, hint_style));
            if i == last {
                let pad = (area.width as usize).saturating_sub(left_len + ver.len());
                spans.push(Span::raw(" ".repeat(pad)));
                spans.push(Span::styled(ver, ver_style));
            }
            Line::from(spans)
        })
        .collect();
    frame.render_widget(Paragraph::new(Text::from(lines)), area);
}
