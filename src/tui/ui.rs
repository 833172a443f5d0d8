use crate::todo::models::StatusFilter;
use crate::tui::app::{App, InputKind, Mode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Stats + filter tabs
            Constraint::Min(0),    // Task list
            Constraint::Length(3), // Footer / input line
        ])
        .split(frame.size());

    draw_header(frame, chunks[0]);
    draw_stats(frame, chunks[1], app);
    draw_todo_list(frame, chunks[2], app);
    draw_footer(frame, chunks[3], app);

    if app.mode == Mode::Help {
        draw_help_window(frame);
    }
}

fn draw_header(frame: &mut Frame, area: ratatui::layout::Rect) {
    let header = Paragraph::new("My Tasks - keep track of your work")
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .style(Style::default().fg(Color::Cyan));

    frame.render_widget(header, area);
}

fn draw_stats(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let stats = app.stats();

    let tabs = [
        (StatusFilter::All, stats.total),
        (StatusFilter::Pending, stats.pending),
        (StatusFilter::Finished, stats.finished),
    ];

    let mut spans = Vec::new();
    for (i, (filter, count)) in tabs.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let text = format!(" {} [{}] ", filter.label(), count);
        let style = if *filter == app.status_filter {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(text, style));
    }
    spans.push(Span::raw("   "));
    spans.push(Span::styled(
        format!("Done: {}%", stats.completion_rate),
        Style::default().fg(Color::Green),
    ));

    let line = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Filter"));

    frame.render_widget(line, area);
}

fn draw_todo_list(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let visible = app.visible_todos();

    if visible.is_empty() {
        let text = if app.search.is_filtering() || app.status_filter != StatusFilter::All {
            "No matching tasks."
        } else {
            "No tasks yet. Add your first task to get started!"
        };
        let empty = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title("Tasks"))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|todo| {
            let checkbox = if todo.is_finished() { "☑" } else { "☐" };

            let title_style = if todo.is_finished() {
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };

            let line = Line::from(vec![
                Span::raw(format!("{} ", checkbox)),
                Span::styled(todo.title.clone(), title_style),
                Span::styled(
                    format!("  ({})", todo.created_at.format("%Y-%m-%d")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Tasks"))
        .highlight_style(
            Style::default()
                .bg(Color::Yellow)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(app.navigation.selected_index));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_footer(frame: &mut Frame, area: ratatui::layout::Rect, app: &App) {
    let footer = match &app.mode {
        Mode::Input(kind) => {
            let title = match kind {
                InputKind::NewTodo => "Add Task",
                InputKind::Rename { .. } => "Edit Task",
            };
            let (before, after) = app.input.split_at_cursor();
            Paragraph::new(format!("{}█{}", before, after))
                .block(Block::default().borders(Borders::ALL).title(title))
                .style(Style::default().fg(Color::White))
        }
        Mode::Search => Paragraph::new(format!("/{}█", app.search.query))
            .block(Block::default().borders(Borders::ALL).title("Search"))
            .style(Style::default().fg(Color::White)),
        _ => {
            if let Some(error) = app.store.error() {
                Paragraph::new(error.to_string())
                    .block(Block::default().borders(Borders::ALL).title("Error"))
                    .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            } else {
                let mut text = String::new();
                if app.store.is_loading() {
                    text.push_str("Adding… | ");
                }
                text.push_str(
                    "↑↓/j/k: navigate | Enter: toggle | a: add | e: edit | d: delete | Tab: filter | /: search | r: refresh | ?: help | q: quit",
                );
                Paragraph::new(text)
                    .block(Block::default().borders(Borders::ALL))
                    .style(Style::default().fg(Color::Yellow))
            }
        }
    };

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = vec![
        "My Tasks - Keyboard Commands",
        "",
        "NAVIGATION:",
        "  ↑↓ / j/k          Navigate up/down",
        "  Enter             Toggle task between To Do and Finished",
        "",
        "EDITING:",
        "  a                 Add a new task",
        "  e                 Edit the selected task's title",
        "  d                 Delete the selected task",
        "",
        "VIEW:",
        "  Tab / f           Cycle filter: All / To Do / Finished",
        "  /                 Search by title (Enter keeps the filter)",
        "  Esc               Clear the search filter",
        "  r                 Refresh from the server",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
        "",
        "Press ? or Esc to close this help window",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(ratatui::widgets::Wrap { trim: true });

    let area = centered_rect(70, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: ratatui::layout::Rect) -> ratatui::layout::Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
