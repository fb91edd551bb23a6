//! Splash screen rendering with ASCII art logo

use crate::state::SplashState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build the BLOOM logo with styling
fn build_logo_text() -> Vec<Line<'static>> {
    let style = Style::default().fg(Color::Yellow);
    let mut lines = vec![
        Line::from(Span::styled(
            "██████╗ ██╗      ██████╗  ██████╗ ███╗   ███╗",
            style,
        )),
        Line::from(Span::styled(
            "██╔══██╗██║     ██╔═══██╗██╔═══██╗████╗ ████║",
            style,
        )),
        Line::from(Span::styled(
            "██████╔╝██║     ██║   ██║██║   ██║██╔████╔██║",
            style,
        )),
        Line::from(Span::styled(
            "██╔══██╗██║     ██║   ██║██║   ██║██║╚██╔╝██║",
            style,
        )),
        Line::from(Span::styled(
            "██████╔╝███████╗╚██████╔╝╚██████╔╝██║ ╚═╝ ██║",
            style,
        )),
        Line::from(Span::styled(
            "╚═════╝ ╚══════╝ ╚═════╝  ╚═════╝ ╚═╝     ╚═╝",
            style,
        )),
    ];
    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(
            "P  I  Z  Z  A",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );
    lines
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines: Vec<Line> = build_logo_text();

    let logo_height = lines.len() as u16;
    let logo_width = 45u16;

    // Center position with scroll offset (can go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

    // Lines that scrolled off the top are not rendered
    let lines_off_top = if y_pos < 0 { (-y_pos) as usize } else { 0 };
    if lines_off_top >= lines.len() {
        return;
    }

    let visible_lines: Vec<Line> = lines.into_iter().skip(lines_off_top).collect();
    let visible_height = visible_lines.len() as u16;
    let render_y = if y_pos < 0 { area.y } else { y_pos as u16 };

    let logo_area = Rect {
        x,
        y: render_y,
        width: logo_width.min(area.width),
        height: visible_height.min(area.height),
    };

    frame.render_widget(Paragraph::new(visible_lines), logo_area);

    // Skip hint at the bottom, only while the logo is still static
    if splash_state.scroll_offset < 1.0 && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_x = area.x + (area.width.saturating_sub(hint.len() as u16)) / 2;
        let hint_y = area.y + area.height - 2;

        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        let hint_area = Rect {
            x: hint_x,
            y: hint_y,
            width: (hint.len() as u16).min(area.width),
            height: 1,
        };
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
