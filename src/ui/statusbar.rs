use chrono::{DateTime, Local};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub struct StatusBar {
    pub loading: bool,
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Local>>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self {
            loading: false,
            error: None,
            last_updated: None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        if self.loading {
            spans.push(Span::styled("● ", Style::default().fg(Color::Yellow)));
            spans.push(Span::styled("LOADING", Style::default().fg(Color::White)));
        } else if let Some(error) = &self.error {
            spans.push(Span::styled("● ", Style::default().fg(Color::Red)));
            spans.push(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            ));
        } else {
            spans.push(Span::styled("● ", Style::default().fg(Color::Green)));
            spans.push(Span::styled("READY", Style::default().fg(Color::White)));
        }

        if let Some(updated) = self.last_updated {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("updated {}", updated.format("%H:%M:%S")),
                Style::default().fg(Color::Gray),
            ));
        }

        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Q", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(":Quit "));
        spans.push(Span::styled("↑↓", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(":Nav "));
        spans.push(Span::styled("Enter", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(":Select "));
        spans.push(Span::styled("←→", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(":Range "));
        spans.push(Span::styled("R", Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(":Refresh"));

        let para = Paragraph::new(Line::from(spans)).block(Block::default());
        frame.render_widget(para, area);
    }
}
