//! The scrollable portfolio document
//!
//! The document is laid out once per locale and width. Section reveal only
//! changes indentation and colors, never the wrapping, so anchor rows stay
//! put while the reader scrolls.

use super::widgets::{text_width, wrap_text};
use crate::app::App;
use crate::content::portfolio::{
    self, Section, ABOUT_HIGHLIGHTS, ABOUT_TEXT, EXPERIENCES, PROJECTS, SKILLS, SOCIAL_LINKS,
};
use crate::content::Locale;
use crate::state::{DocumentMetrics, Reveal};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest text column, in characters
const MAX_TEXT_WIDTH: u16 = 80;
/// Narrowest text column, in characters
const MIN_TEXT_WIDTH: u16 = 20;
/// Background and foreground gray levels for the fade-in ramp
const FADE_FROM: u8 = 60;
const FADE_TO: u8 = 220;

/// Laid-out document
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub metrics: DocumentMetrics,
}

/// Width of the centered text column for a terminal width
fn column_width(width: u16) -> u16 {
    width.saturating_sub(4).clamp(MIN_TEXT_WIDTH, MAX_TEXT_WIDTH)
}

/// Wrapping width: the column at its smallest reveal scale
fn wrap_width(width: u16) -> usize {
    (column_width(width) as usize * 4 / 5).max(1)
}

/// Measure the document without styling it
pub fn measure(locale: Locale, width: u16) -> DocumentMetrics {
    build(locale, width, Reveal::FULL).metrics
}

struct Builder {
    lines: Vec<Line<'static>>,
    anchors: Vec<(Section, u16)>,
    wrap: usize,
    indent: String,
    body: Style,
    heading: Style,
    muted: Style,
}

impl Builder {
    fn row(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    fn blank(&mut self) {
        self.lines.push(Line::from(""));
    }

    fn push(&mut self, spans: Vec<Span<'static>>) {
        let mut line = vec![Span::raw(self.indent.clone())];
        line.extend(spans);
        self.lines.push(Line::from(line));
    }

    fn text(&mut self, text: &str, style: Style) {
        for line in wrap_text(text, self.wrap) {
            self.push(vec![Span::styled(line, style)]);
        }
    }

    /// Wrapped text with a bullet and a hanging indent
    fn bullet(&mut self, text: &str) {
        let body = self.body;
        let wrap = self.wrap.saturating_sub(4).max(1);
        for (idx, line) in wrap_text(text, wrap).into_iter().enumerate() {
            let marker = if idx == 0 { "  • " } else { "    " };
            self.push(vec![Span::styled(marker, self.muted), Span::styled(line, body)]);
        }
    }

    fn heading(&mut self, section: Section, locale: Locale) {
        self.anchors.push((section, self.row()));
        let title = section.heading().get(locale);
        self.push(vec![Span::styled(title.to_string(), self.heading)]);
        self.push(vec![Span::styled(
            "─".repeat(text_width(title) as usize),
            self.muted,
        )]);
        self.blank();
    }
}

/// Lay out the whole document.
///
/// `reveal` fades and indents every section after the hero.
pub fn build(locale: Locale, width: u16, reveal: Reveal) -> Document {
    let column = column_width(width);
    let base_indent = width.saturating_sub(column) / 2;

    let gray = reveal.gray_level(FADE_FROM, FADE_TO);
    let revealed_heading = if reveal.opacity < 0.5 {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    };

    let mut b = Builder {
        lines: Vec::new(),
        anchors: Vec::new(),
        wrap: wrap_width(width),
        indent: " ".repeat(base_indent as usize),
        body: Style::default().fg(Color::Gray),
        heading: Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        muted: Style::default().fg(Color::DarkGray),
    };

    section(&mut b, Section::Hero, locale);

    b.indent = " ".repeat((base_indent + reveal.margin(column)) as usize);
    b.body = Style::default().fg(Color::Rgb(gray, gray, gray));
    b.heading = revealed_heading;

    for s in Section::ALL.into_iter().filter(|s| *s != Section::Hero) {
        section(&mut b, s, locale);
    }

    let height = b.row();
    Document {
        lines: b.lines,
        metrics: DocumentMetrics {
            height,
            anchors: b.anchors,
        },
    }
}

fn section(b: &mut Builder, section: Section, locale: Locale) {
    match section {
        Section::Hero => hero(b, locale),
        Section::About => about(b, locale),
        Section::Experience => experience(b, locale),
        Section::Skills => skills(b, locale),
        Section::Projects => projects(b, locale),
        Section::Contact => contact(b, locale),
    }
}

fn hero(b: &mut Builder, locale: Locale) {
    b.anchors.push((Section::Hero, 0));
    for _ in 0..3 {
        b.blank();
    }
    b.push(vec![Span::styled(
        portfolio::OWNER_NAME,
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )]);
    b.text(portfolio::TAGLINE.get(locale), Style::default().fg(Color::Gray));
    b.blank();

    let key = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    b.push(vec![
        Span::styled("[c] ", key),
        Span::raw(portfolio::CONTACT_ACTION.get(locale)),
        Span::raw("    "),
        Span::styled("[d] ", key),
        Span::raw(portfolio::CV_ACTION.get(locale)),
    ]);
    for _ in 0..3 {
        b.blank();
    }
}

fn about(b: &mut Builder, locale: Locale) {
    b.heading(Section::About, locale);
    b.text(ABOUT_TEXT.get(locale), b.body);
    b.blank();
    for highlight in ABOUT_HIGHLIGHTS {
        b.bullet(highlight);
    }
    b.blank();
    b.blank();
}

fn experience(b: &mut Builder, locale: Locale) {
    b.heading(Section::Experience, locale);
    for job in EXPERIENCES {
        let title_style = b.body.add_modifier(Modifier::BOLD);
        b.text(job.title.get(locale), title_style);
        b.text(job.period.get(locale), b.muted);
        for bullet in job.bullets {
            b.bullet(bullet.get(locale));
        }
        b.text(job.url, b.muted.add_modifier(Modifier::UNDERLINED));
        b.blank();
    }
    b.blank();
}

fn skills(b: &mut Builder, locale: Locale) {
    b.heading(Section::Skills, locale);
    for group in SKILLS {
        let title_style = b.body.add_modifier(Modifier::BOLD);
        b.text(group.title.get(locale), title_style);
        b.text(group.tools.get(locale), b.body);
        b.blank();
    }
    b.blank();
}

fn projects(b: &mut Builder, locale: Locale) {
    b.heading(Section::Projects, locale);
    for project in PROJECTS {
        let title_style = b.body.add_modifier(Modifier::BOLD);
        b.text(project.title.get(locale), title_style);
        b.text(project.description.get(locale), b.body);
        if let Some(url) = project.url {
            b.text(url, b.muted.add_modifier(Modifier::UNDERLINED));
        }
        b.blank();
    }
    b.blank();
}

fn contact(b: &mut Builder, locale: Locale) {
    b.heading(Section::Contact, locale);
    b.text(portfolio::CONTACT_PROMPT.get(locale), b.body);
    b.blank();

    let key = Style::default().fg(Color::Cyan);
    for link in SOCIAL_LINKS {
        b.push(vec![
            Span::styled(format!("[{}] ", link.copy_key), key),
            Span::styled(format!("{:<9}", link.label), b.body),
            Span::styled(link.target, b.muted),
        ]);
    }
    b.blank();
    b.blank();
    b.text(portfolio::FOOTER.get(locale), b.muted);
    b.blank();
}

/// Draw the visible slice of the document
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let document = build(state.locale, area.width, state.reveal());
    let paragraph = Paragraph::new(document.lines).scroll((state.scroll_offset, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::reveal_at;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_anchors_cover_every_section_in_order() {
        let metrics = measure(Locale::Fr, 100);
        let sections: Vec<Section> = metrics.anchors.iter().map(|(s, _)| *s).collect();
        assert_eq!(sections, Section::ALL.to_vec());

        let rows: Vec<u16> = metrics.anchors.iter().map(|(_, r)| *r).collect();
        assert!(rows.windows(2).all(|w| w[0] < w[1]));
        assert!(metrics.height > *rows.last().unwrap());
    }

    #[test]
    fn test_anchor_rows_hold_headings() {
        let document = build(Locale::En, 100, Reveal::FULL);
        for (section, row) in &document.metrics.anchors {
            if *section == Section::Hero {
                continue;
            }
            let text = line_text(&document.lines[*row as usize]);
            assert_eq!(text.trim(), section.heading().get(Locale::En));
        }
    }

    #[test]
    fn test_reveal_does_not_change_layout() {
        let hidden = build(Locale::Fr, 90, reveal_at(0.0));
        let shown = build(Locale::Fr, 90, Reveal::FULL);
        assert_eq!(hidden.metrics, shown.metrics);
    }

    #[test]
    fn test_reveal_indents_sections() {
        let hidden = build(Locale::En, 100, reveal_at(0.0));
        let shown = build(Locale::En, 100, Reveal::FULL);
        let row = hidden.metrics.anchor(Section::About).unwrap() as usize;
        let indent = |doc: &Document| line_text(&doc.lines[row]).len()
            - line_text(&doc.lines[row]).trim_start().len();
        assert!(indent(&hidden) > indent(&shown));
    }

    #[test]
    fn test_locale_changes_text() {
        let fr = build(Locale::Fr, 100, Reveal::FULL);
        let en = build(Locale::En, 100, Reveal::FULL);
        let all = |doc: &Document| {
            doc.lines
                .iter()
                .map(line_text)
                .collect::<Vec<_>>()
                .join("\n")
        };
        assert!(all(&fr).contains("Mes Projets"));
        assert!(all(&en).contains("My Projects"));
        assert!(!all(&en).contains("Mes Projets"));
    }

    #[test]
    fn test_narrow_terminal_grows_document() {
        let wide = measure(Locale::Fr, 120);
        let narrow = measure(Locale::Fr, 30);
        assert!(narrow.height > wide.height);
    }

    #[test]
    fn test_wrapped_lines_fit_column() {
        let width = 60;
        let document = build(Locale::Fr, width, Reveal::FULL);
        for line in &document.lines {
            let text = line_text(line);
            // URLs are never split, everything else fits
            if !text.contains("http") && !text.contains('@') {
                assert!(text.chars().count() <= width as usize, "{text}");
            }
        }
    }
}
