use crate::engine::collectable::{Collectable, CollectableKind};
use crate::tui::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, List, ListItem, Paragraph, Row, Table, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Header/Tabs
                Constraint::Length(3), // Summary
                Constraint::Min(0),    // Main Content
                Constraint::Length(1), // Status Bar
            ]
            .as_ref(),
        )
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_summary(f, app, chunks[1]);

    match app.kind() {
        Some(kind) => draw_table(f, app, kind, chunks[2]),
        None => draw_activity(f, app, chunks[2]),
    }

    draw_status_bar(f, app, chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = app
        .tabs
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let style = if i == app.tab_index {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(t, style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Critterdex "),
        )
        .select(app.tab_index)
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    f.render_widget(tabs, area);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Availability ");

    let text = if app.is_loading() {
        Line::from(Span::styled(
            "Loading catalogs...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(app.summary.clone())
    };

    f.render_widget(Paragraph::new(text).block(block), area);
}

fn draw_table(f: &mut Frame, app: &mut App, kind: CollectableKind, area: Rect) {
    let headers = table_headers(kind);
    let header = Row::new(
        headers
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))),
    );

    let rows: Vec<Row> = app
        .displayed
        .iter()
        .map(|c| {
            let caught = app.selections.is_selected(kind, c);
            let marker = if caught { "[x]" } else { "[ ]" };
            let mut style = Style::default();
            if caught {
                style = style.fg(Color::Green);
            }
            if c.is_last_month {
                style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
            }
            Row::new(
                table_cells(kind, c, marker)
                    .into_iter()
                    .map(Cell::from),
            )
            .style(style)
        })
        .collect();

    let title = format!(" {} ", kind.name());
    let table = Table::new(rows, table_widths(kind))
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn table_headers(kind: CollectableKind) -> Vec<&'static str> {
    match kind {
        CollectableKind::Bug => vec!["", "Name", "Time", "Location", "Weather", "Months"],
        CollectableKind::Fish => vec![
            "",
            "Name",
            "Time",
            "Location",
            "Shadow Size",
            "Notes",
            "Months",
        ],
        CollectableKind::SeaCreature => vec!["", "Name", "Time", "Shadow Size", "Months"],
    }
}

fn table_cells(kind: CollectableKind, c: &Collectable, marker: &str) -> Vec<String> {
    match kind {
        CollectableKind::Bug => vec![
            marker.to_string(),
            c.name.clone(),
            c.time_label(),
            c.location.clone(),
            c.weather.clone(),
            c.months.clone(),
        ],
        CollectableKind::Fish => vec![
            marker.to_string(),
            c.name.clone(),
            c.time_label(),
            c.location.clone(),
            c.shadow_size.clone(),
            c.notes.clone(),
            c.months.clone(),
        ],
        CollectableKind::SeaCreature => vec![
            marker.to_string(),
            c.name.clone(),
            c.time_label(),
            c.shadow_size.clone(),
            c.months.clone(),
        ],
    }
}

fn table_widths(kind: CollectableKind) -> Vec<Constraint> {
    match kind {
        CollectableKind::Bug => vec![
            Constraint::Length(3),
            Constraint::Percentage(22),
            Constraint::Length(14),
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ],
        CollectableKind::Fish => vec![
            Constraint::Length(3),
            Constraint::Percentage(18),
            Constraint::Length(14),
            Constraint::Percentage(14),
            Constraint::Percentage(12),
            Constraint::Percentage(22),
            Constraint::Percentage(26),
        ],
        CollectableKind::SeaCreature => vec![
            Constraint::Length(3),
            Constraint::Percentage(28),
            Constraint::Length(14),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
        ],
    }
}

fn draw_activity(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)].as_ref())
        .split(area);

    let logs_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Recent Activity ");
    let logs: Vec<ListItem> = app
        .logs
        .iter()
        .rev()
        .take(30)
        .map(|l| {
            ListItem::new(Line::from(vec![
                Span::styled(">> ", Style::default().fg(Color::Blue)),
                Span::raw(l.clone()),
            ]))
        })
        .collect();
    f.render_widget(List::new(logs).block(logs_block), chunks[0]);

    let settings_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(" Settings ");
    let on_off = |v: bool| if v { "on" } else { "off" };
    let text = vec![
        Line::from(vec![
            Span::styled("Assets dir:  ", Style::default().fg(Color::Yellow)),
            Span::raw(app.config.system.assets_dir.clone()),
        ]),
        Line::from(vec![
            Span::styled("Data dir:    ", Style::default().fg(Color::Yellow)),
            Span::raw(app.config.system.data_dir.clone()),
        ]),
        Line::from(vec![
            Span::styled("Time filter: ", Style::default().fg(Color::Green)),
            Span::raw(app.time_filter.title()),
        ]),
        Line::from(vec![
            Span::styled("Missing only:", Style::default().fg(Color::Green)),
            Span::raw(format!(" {}", on_off(app.show_only_missing))),
        ]),
        Line::from(vec![
            Span::styled("It's raining:", Style::default().fg(Color::Green)),
            Span::raw(format!(" {}", on_off(app.its_raining))),
        ]),
    ];
    f.render_widget(Paragraph::new(text).block(settings_block), chunks[1]);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_style = if app.its_raining {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::Black).bg(Color::Gray)
    };

    let status_text = format!(
        " FILTER: {} | Q: Quit | TAB: Switch Tab | SPACE: Toggle Caught | T: Time Filter | M: Missing Only | R: Raining ",
        app.time_filter.title()
    );
    f.render_widget(Paragraph::new(status_text).style(status_style), area);
}
