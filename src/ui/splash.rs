//! Splash screen rendering with block-letter name

use crate::state::{SplashPhase, SplashState};
use crate::ui::widgets::text_width;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LOGO: [&str; 5] = [
    "█   █   ███   █████  █████  █████   ███ ",
    "██ ██  █   █    █      █    █      █   █",
    "█ █ █  █████    █      █    ████   █   █",
    "█   █  █   █    █      █    █      █   █",
    "█   █  █   █    █      █    █████   ███ ",
];

/// Build the logo with a blue-to-purple gradient, one color per row
fn build_logo() -> Vec<Line<'static>> {
    const GRADIENT: [Color; 5] = [
        Color::Rgb(59, 130, 246),
        Color::Rgb(86, 118, 246),
        Color::Rgb(113, 106, 246),
        Color::Rgb(140, 94, 246),
        Color::Rgb(168, 85, 247),
    ];
    LOGO.iter()
        .zip(GRADIENT)
        .map(|(row, color)| Line::from(Span::styled(*row, Style::default().fg(color))))
        .collect()
}

/// Draw the splash screen
pub fn draw(frame: &mut Frame, area: Rect, splash_state: &SplashState) {
    let lines = build_logo();

    let logo_height = lines.len() as u16;
    let logo_width = text_width(LOGO[0]);

    // Center position with scroll offset (can go above the screen)
    let base_y = area.y as i32 + (area.height.saturating_sub(logo_height)) as i32 / 2;
    let y_pos = base_y - splash_state.scroll_offset as i32;
    let x = area.x + (area.width.saturating_sub(logo_width)) / 2;

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

    // "Press any key to skip" hint at bottom while the name holds still
    if splash_state.phase() == SplashPhase::Display && area.height > 2 {
        let hint = "Press any key to skip";
        let hint_width = text_width(hint);
        let hint_area = Rect {
            x: area.x + (area.width.saturating_sub(hint_width)) / 2,
            y: area.y + area.height - 2,
            width: hint_width.min(area.width),
            height: 1,
        };
        let hint_line = Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray)));
        frame.render_widget(Paragraph::new(hint_line), hint_area);
    }
}
