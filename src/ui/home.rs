//! Landing view: welcome heading, pizza artwork, and the order hint

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// The artwork asset, embedded by reference
const PIZZA_ART: &str = include_str!("../../assets/pizza.txt");

/// Draw the landing view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Welcome to Bloom Pizza!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::from(""),
    ];

    lines.extend(
        PIZZA_ART
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Red))).centered()),
    );

    let content_height = lines.len() as u16;
    let y = area.y + area.height.saturating_sub(content_height) / 2;
    let content_area = Rect {
        x: area.x,
        y,
        width: area.width,
        height: content_height.min(area.height),
    };
    frame.render_widget(Paragraph::new(lines), content_area);

    if app.config.show_help() && area.height > 2 {
        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("click", Style::default().fg(Color::Cyan)),
            Span::raw(" the pizza: order  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ])
        .centered()
        .style(Style::default().fg(Color::DarkGray));

        let hint_area = Rect {
            x: area.x,
            y: area.y + area.height - 2,
            width: area.width,
            height: 1,
        };
        frame.render_widget(Paragraph::new(hint), hint_area);
    }
}
