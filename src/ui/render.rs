use ratatui::layout::Position;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::todo::{Filter, RemoteTodos, Todo};
use crate::ui::app::App;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DONE_TEXT, GLOBAL_BORDER, HEADER_TEXT, STATUS_ERROR,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project the whole model onto the frame. Pure: every call re-derives the
/// full UI from the current state, no caching between frames.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, input, footer) = layout_regions(area);

    frame.render_widget(header_widget(app), header);
    draw_body(frame, app, body);
    draw_input(frame, app, input);
    frame.render_widget(footer_widget(app, footer), footer);
}

fn header_widget(app: &App) -> Paragraph<'static> {
    let mut spans = vec![
        Span::styled(
            " tudu ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(GLOBAL_BORDER)),
    ];
    for filter in [Filter::All, Filter::Active, Filter::Completed] {
        let style = if filter == app.model().filter {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DONE_TEXT)
        };
        spans.push(Span::styled(format!(" {} ", filter.label()), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans)).block(bordered_block())
}

fn draw_body(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    match &app.model().todos {
        RemoteTodos::Loading => {
            let placeholder = Paragraph::new(Line::from(Span::styled(
                "Loading todos…",
                Style::default().fg(DONE_TEXT).add_modifier(Modifier::DIM),
            )))
            .block(bordered_block());
            frame.render_widget(placeholder, area);
        }
        RemoteTodos::Failed(message) => {
            let error = Paragraph::new(Line::from(Span::styled(
                message.clone(),
                Style::default().fg(STATUS_ERROR),
            )))
            .block(bordered_block());
            frame.render_widget(error, area);
        }
        RemoteTodos::Loaded(_) => {
            let visible = app.model().visible();
            if visible.is_empty() {
                let placeholder = Paragraph::new(Line::from(Span::styled(
                    empty_message(app.model().filter),
                    Style::default().fg(DONE_TEXT).add_modifier(Modifier::DIM),
                )))
                .block(bordered_block());
                frame.render_widget(placeholder, area);
                return;
            }

            let items: Vec<ListItem> = visible
                .iter()
                .map(|todo| ListItem::new(todo_line(todo)))
                .collect();
            let list = List::new(items)
                .block(bordered_block())
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT))
                .highlight_symbol("> ");
            let mut state = ListState::default().with_selected(Some(app.selection()));
            frame.render_stateful_widget(list, area, &mut state);
        }
    }
}

fn draw_input(frame: &mut Frame<'_>, app: &App, area: ratatui::layout::Rect) {
    let draft = app.model().draft.as_str();
    let widget = Paragraph::new(draft)
        .style(Style::default().fg(HEADER_TEXT))
        .block(bordered_block().title(" New todo "));
    frame.render_widget(widget, area);

    if area.width > 2 && area.height > 2 {
        let max_x = area.width.saturating_sub(2) as usize;
        let cursor_x = area.x + 1 + draft.chars().count().min(max_x) as u16;
        frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn footer_widget(app: &App, area: ratatui::layout::Rect) -> Paragraph<'static> {
    let summary = format!(" {}", app.model().summary());
    let hints = "Enter: Add │ ↑/↓: Select │ Ctrl+T: Toggle │ Ctrl+D: Delete │ Tab: Filter │ Ctrl+Q: Quit ";
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count.
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(summary.chars().count())
        .saturating_sub(hints.chars().count())
        .saturating_sub(version.chars().count());

    let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(summary, Style::default().fg(HEADER_TEXT)),
        Span::styled(" ".repeat(padding), dim),
        Span::styled(hints.to_string(), dim),
        Span::styled(version, dim),
    ]);

    Paragraph::new(line).block(bordered_block())
}

fn bordered_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn todo_line(todo: &Todo) -> Line<'_> {
    let checkbox = if todo.completed { "[x] " } else { "[ ] " };
    let text_style = if todo.completed {
        Style::default()
            .fg(DONE_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(HEADER_TEXT)
    };
    Line::from(vec![
        Span::styled(checkbox, Style::default().fg(ACCENT)),
        Span::styled(todo.description.as_str(), text_style),
    ])
}

fn empty_message(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "No todos yet. Type one below and press Enter.",
        Filter::Active => "Nothing left to do.",
        Filter::Completed => "Nothing completed yet.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn todo_line_marks_completed() {
        let done = Todo {
            id: 1,
            description: "Coffee".to_string(),
            completed: true,
        };
        assert_eq!(line_text(&todo_line(&done)), "[x] Coffee");
    }

    #[test]
    fn todo_line_marks_active() {
        let open = Todo {
            id: 2,
            description: "Write app".to_string(),
            completed: false,
        };
        assert_eq!(line_text(&todo_line(&open)), "[ ] Write app");
    }

    #[test]
    fn empty_message_varies_by_filter() {
        assert_ne!(empty_message(Filter::All), empty_message(Filter::Active));
        assert_ne!(
            empty_message(Filter::Active),
            empty_message(Filter::Completed)
        );
    }
}
