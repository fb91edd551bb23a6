//! Order form rendering: editable fields with inline errors, the topping
//! checklist, the submit control, and the read-only confirmation.

use crate::app::App;
use crate::state::toppings::{format_selection, TOPPINGS};
use crate::state::{
    FormField, OrderForm, ValidationError, FIELD_FULL_NAME, FIELD_SIZE, FIELD_SUBMIT,
    FIELD_TOPPINGS,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the order view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Order Your Pizza ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    if app.state.order.is_complete() {
        draw_confirmation(frame, area, app);
    } else {
        draw_form(frame, area, app);
    }
}

/// Draw a single-line form field
fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, placeholder: &str, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let cursor = if is_active { "▌" } else { "" };

    let content = if display_value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(placeholder.to_string(), style)))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.block(block), area);
}

/// Draw the inline error line for a field, empty when the rule passes
fn draw_error(frame: &mut Frame, area: Rect, error: Option<ValidationError>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// Draw the topping checklist
fn draw_toppings(frame: &mut Frame, area: Rect, form: &OrderForm, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let lines: Vec<Line> = TOPPINGS
        .iter()
        .enumerate()
        .map(|(i, topping)| {
            let checkbox = if form.is_topping_selected(topping.id) {
                "[x]"
            } else {
                "[ ]"
            };
            let style = if is_active && i == form.topping_cursor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(format!(" {checkbox} {}", topping.text), style))
        })
        .collect();

    let block = Block::default()
        .title(" Toppings ")
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Draw the submit control, styled disabled while the form is invalid
fn draw_submit(frame: &mut Frame, area: Rect, enabled: bool, is_active: bool) {
    let label_style = match (enabled, is_active) {
        (true, true) => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        (true, false) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        (false, _) => Style::default().fg(Color::DarkGray),
    };
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label = if enabled {
        " Place Order "
    } else {
        " Place Order (complete the form first) "
    };

    let block = Block::default().borders(Borders::ALL).border_style(border_style);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, label_style)))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Full name
            Constraint::Length(1), // Full name error
            Constraint::Length(3), // Size
            Constraint::Length(1), // Size error
            Constraint::Length(7), // Toppings
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let form = &app.state.order;
    let active = form.active_field();

    draw_field(
        frame,
        chunks[0],
        &form.full_name,
        "Type full name",
        active == FIELD_FULL_NAME,
    );
    draw_error(frame, chunks[1], form.errors.full_name);

    draw_field(frame, chunks[2], &form.size, "", active == FIELD_SIZE);
    draw_error(frame, chunks[3], form.errors.size);

    draw_toppings(frame, chunks[4], form, active == FIELD_TOPPINGS);

    draw_submit(
        frame,
        chunks[5],
        form.submit_enabled(),
        active == FIELD_SUBMIT,
    );

    if app.config.show_help() {
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(": toggle/cycle  "),
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(": place order  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": back"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[6]);
    }
}

fn draw_confirmation(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Heading
            Constraint::Min(3),    // Summary
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    let form = &app.state.order;

    let heading = Paragraph::new(Line::from(Span::styled(
        "Order Completed:",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[0]);

    let summary = vec![
        Line::from(format!("Full Name: {}", form.full_name.as_text())),
        Line::from(format!("Size: {}", form.size.as_text())),
        Line::from(format!("Toppings: {}", format_selection(&form.toppings))),
    ];
    frame.render_widget(Paragraph::new(summary), chunks[1]);

    if app.config.show_help() {
        let help = Paragraph::new(Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": back  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ]))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);
    }
}
