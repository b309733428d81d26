//! Stand-in for the game world drawn underneath the console

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Draw a backdrop with a marker bouncing across it
pub fn render(frame: &mut Frame, area: Rect, elapsed: f32) {
    let backdrop = Style::default().bg(Color::Rgb(20, 24, 40)).fg(Color::Gray);
    let lines = vec![
        Line::from(""),
        Line::from("game-console demo"),
        Line::from("` toggles the console, Esc quits"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(backdrop),
        area,
    );

    if area.width == 0 || area.height == 0 {
        return;
    }

    let span = f32::from(area.width.saturating_sub(1)).max(1.0);
    let phase = (elapsed * 12.0) % (span * 2.0);
    let column = if phase > span { span * 2.0 - phase } else { phase };
    let x = area.x + column as u16;
    let y = area.y + area.height - 1;
    frame
        .buffer_mut()
        .set_string(x, y, "@", Style::default().fg(Color::Yellow));
}
