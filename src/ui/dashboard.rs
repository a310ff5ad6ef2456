use crate::model::{Property, PropertyStatus};
use crate::stats::{
    count_by_status, floor_summaries, hall_summaries, health_percentage, room_summaries,
    type_insights, BuildingStats, LocationSummary,
};
use crate::ui::app::{App, FocusPanel};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Gauge, List, ListItem, Paragraph, Row, Scrollbar, ScrollbarOrientation,
        ScrollbarState, Table,
    },
    Frame,
};

const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68); // working
const BRAND_RED: Color = Color::Rgb(0xB0, 0x4A, 0x3F); // not working
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C); // focus
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);

fn status_color(status: PropertyStatus) -> Color {
    match status {
        PropertyStatus::Working => BRAND_GREEN,
        PropertyStatus::NotWorking => BRAND_RED,
    }
}

fn health_color(percent: u8) -> Color {
    match percent {
        90..=100 => BRAND_GREEN,
        70..=89 => BRAND_ORANGE,
        _ => BRAND_RED,
    }
}

fn row_style(is_selected: bool, is_focused: bool) -> Style {
    if is_selected && is_focused {
        SELECTED_STYLE
    } else if is_selected {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

fn panel_block(title: String, is_focused: bool) -> Block<'static> {
    let border_style = if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}

pub fn draw_dashboard(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_footer(
        frame,
        chunks[2],
        app,
        " ←→ Panel | ↑↓ Select | Enter Open | i Inventory | q Quit ",
    );
}

/// Header line; the most-issues part only appears once something is broken.
fn header_title(user_name: &str, stats: &BuildingStats) -> String {
    let mut title = format!(
        " Etrack | {user_name} | {} floors | {} halls | {} rooms | {} items | {}% healthy ",
        stats.floors, stats.halls, stats.rooms, stats.properties, stats.health_percentage,
    );

    let worst = stats.most_problematic;
    if worst.not_working > 0 {
        title.push_str(&format!(
            "| most issues: {} ({:.0}%) ",
            worst.property_type.label(),
            worst.not_working_percentage()
        ));
    }
    title
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let stats = BuildingStats::collect(&app.building);
    let title = header_title(&app.user.name, &stats);

    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(16), // Floors
        Constraint::Percentage(20), // Halls
        Constraint::Percentage(24), // Rooms
        Constraint::Percentage(40), // Summary
    ])
    .split(area);

    draw_floors(frame, chunks[0], app);
    draw_halls(frame, chunks[1], app);
    draw_rooms(frame, chunks[2], app);
    draw_summary(frame, chunks[3], app);
}

fn location_items<'a>(
    summaries: &'a [LocationSummary],
    selected: usize,
    is_focused: bool,
) -> Vec<ListItem<'a>> {
    summaries
        .iter()
        .enumerate()
        .map(|(i, summary)| {
            let is_selected = i == selected;
            let marker = if is_selected && is_focused { " ◄" } else { "" };
            let health = summary.health_percentage();

            ListItem::new(Line::from(vec![
                Span::styled(summary.name.as_str(), row_style(is_selected, is_focused)),
                Span::styled(
                    format!(" ({})", summary.count),
                    Style::default().fg(BRAND_MUTED),
                ),
                Span::styled(format!(" {health}%"), Style::default().fg(health_color(health))),
                Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            ]))
        })
        .collect()
}

fn draw_floors(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Floors;
    let summaries = floor_summaries(&app.building);
    let items = location_items(&summaries, app.selected_floor, is_focused);

    let title = format!(" Floors ({}) ", summaries.len());
    frame.render_widget(List::new(items).block(panel_block(title, is_focused)), area);
}

fn draw_halls(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Halls;
    let summaries = app.current_floor().map(hall_summaries).unwrap_or_default();
    let items = location_items(&summaries, app.selected_hall, is_focused);

    let title = format!(" Halls ({}) ", summaries.len());
    frame.render_widget(List::new(items).block(panel_block(title, is_focused)), area);
}

fn draw_rooms(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Rooms;
    let summaries = app.current_hall().map(room_summaries).unwrap_or_default();
    let items = location_items(&summaries, app.selected_room, is_focused);

    let title = format!(" Rooms ({}) ", summaries.len());
    frame.render_widget(List::new(items).block(panel_block(title, is_focused)), area);
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let (scope_name, properties) = app.scope();
    let counts = count_by_status(properties.iter().copied());

    let chunks = Layout::vertical([
        Constraint::Length(3), // Status counts
        Constraint::Length(3), // Health gauge
        Constraint::Min(5),    // Per-type table
    ])
    .split(area);

    let status_line = Line::from(vec![
        Span::styled(format!("Working {}", counts.working), Style::default().fg(BRAND_GREEN)),
        Span::raw("  |  "),
        Span::styled(
            format!("Not Working {}", counts.not_working),
            Style::default().fg(BRAND_RED),
        ),
        Span::raw(format!("  |  Total {}", counts.total())),
    ]);
    let status = Paragraph::new(status_line).block(
        Block::default()
            .title(format!(" {scope_name} "))
            .borders(Borders::ALL),
    );
    frame.render_widget(status, chunks[0]);

    let health = counts.health_percentage();
    let gauge = Gauge::default()
        .block(Block::default().title(" Health ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(health_color(health)))
        .percent(u16::from(health));
    frame.render_widget(gauge, chunks[1]);

    let header = Row::new(vec!["Type", "Total", "Working", "Not Working", "Working %"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = type_insights(properties.iter().copied())
        .into_iter()
        .map(|s| {
            let style = if s.not_working > 0 {
                Style::default().fg(BRAND_RED)
            } else {
                Style::default()
            };
            Row::new(vec![
                s.property_type.label(),
                s.total().to_string(),
                s.working.to_string(),
                s.not_working.to_string(),
                format!("{}%", s.working_percentage()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(28),
        Constraint::Percentage(14),
        Constraint::Percentage(16),
        Constraint::Percentage(22),
        Constraint::Percentage(20),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(" By Type ").borders(Borders::ALL));
    frame.render_widget(table, chunks[2]);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, help: &str) {
    let text = match &app.message {
        Some(message) => format!(" {message} |{help}"),
        None => help.to_string(),
    };
    let footer = Paragraph::new(text)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn property_cells(property: &Property) -> Vec<String> {
    vec![
        property.id.clone(),
        property.property_type.label(),
        property.brand.clone(),
        property.model.clone(),
        property.status.label().to_string(),
        property.purchase_date.to_string(),
        property.notes.clone().unwrap_or_else(|| "-".to_string()),
    ]
}

fn draw_scrollbar(frame: &mut Frame, area: Rect, len: usize, position: usize) {
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(Some("↑"))
        .end_symbol(Some("↓"));
    let mut scrollbar_state = ScrollbarState::new(len).position(position);

    let scrollbar_area = Rect {
        x: area.x + area.width - 1,
        y: area.y + 2,
        width: 1,
        height: area.height.saturating_sub(3),
    };
    frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}

fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if selected >= visible_rows {
        selected - visible_rows + 1
    } else {
        0
    }
}

pub fn draw_room(frame: &mut Frame, app: &App) {
    let (floor, hall, room) = match (app.current_floor(), app.current_hall(), app.current_room()) {
        (Some(f), Some(h), Some(r)) => (f, h, r),
        _ => return,
    };

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: location
        Constraint::Min(6),    // Properties
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let health = health_percentage(&room.properties);
    let header = Paragraph::new(format!(
        " {} / {} / {} | {} items | {}% healthy ",
        floor.name,
        hall.name,
        room.name,
        room.properties.len(),
        health
    ))
    .style(HEADER_STYLE)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let visible_rows = (chunks[1].height as usize).saturating_sub(3);
    let offset = scroll_offset(app.selected_property, visible_rows);

    let header = Row::new(vec![
        "ID", "Type", "Brand", "Model", "Status", "Purchased", "Notes",
    ])
    .style(HEADER_STYLE)
    .height(1);

    let rows: Vec<Row> = room
        .properties
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(i, property)| {
            let style = if i == app.selected_property {
                SELECTED_STYLE
            } else {
                Style::default().fg(status_color(property.status))
            };
            Row::new(property_cells(property)).style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(14),
        Constraint::Percentage(10),
        Constraint::Percentage(11),
        Constraint::Percentage(13),
        Constraint::Percentage(10),
        Constraint::Percentage(11),
        Constraint::Percentage(31),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!(" Properties ({}) ", room.properties.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, chunks[1]);

    if room.properties.len() > visible_rows {
        draw_scrollbar(frame, chunks[1], room.properties.len(), app.selected_property);
    }

    draw_footer(
        frame,
        chunks[2],
        app,
        " Esc Back | ↑↓ Select | s Toggle status | n Log maintenance | q Quit ",
    );
}

pub fn draw_inventory(frame: &mut Frame, app: &App) {
    let items = app.inventory();

    let chunks = Layout::vertical([
        Constraint::Length(3), // Header: filters
        Constraint::Min(6),    // Inventory
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    let type_label = app.inventory_type.map_or_else(|| "All".to_string(), |t| t.label());
    let status_label = app.inventory_status.map_or("All", |s| s.label());
    let counts = count_by_status(items.iter().map(|l| l.property));

    let header = Paragraph::new(format!(
        " Inventory | Type: {type_label} | Status: {status_label} | {} items ({} working, {} not working) ",
        counts.total(),
        counts.working,
        counts.not_working
    ))
    .style(HEADER_STYLE)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let visible_rows = (chunks[1].height as usize).saturating_sub(3);
    let offset = scroll_offset(app.selected_inventory, visible_rows);

    let table_header = Row::new(vec!["Location", "ID", "Type", "Brand", "Model", "Status"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(i, item)| {
            let property = item.property;
            let style = if i == app.selected_inventory {
                SELECTED_STYLE
            } else {
                Style::default().fg(status_color(property.status))
            };
            Row::new(vec![
                app.location_label(item),
                property.id.clone(),
                property.property_type.label(),
                property.brand.clone(),
                property.model.clone(),
                property.status.label().to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Percentage(30),
        Constraint::Percentage(18),
        Constraint::Percentage(12),
        Constraint::Percentage(12),
        Constraint::Percentage(15),
        Constraint::Percentage(13),
    ];

    let table = Table::new(rows, widths)
        .header(table_header)
        .block(Block::default().title(" Properties ").borders(Borders::ALL));
    frame.render_widget(table, chunks[1]);

    if items.len() > visible_rows {
        draw_scrollbar(frame, chunks[1], items.len(), app.selected_inventory);
    }

    draw_footer(
        frame,
        chunks[2],
        app,
        " Esc Back | ↑↓ Select | t Type | f Status | s Toggle status | q Quit ",
    );
}
