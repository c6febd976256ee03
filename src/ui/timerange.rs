use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeRange {
    OneDay,
    OneWeek,
    OneMonth,
    SixMonths,
    OneYear,
}

impl TimeRange {
    pub fn all() -> Vec<TimeRange> {
        vec![
            TimeRange::OneDay,
            TimeRange::OneWeek,
            TimeRange::OneMonth,
            TimeRange::SixMonths,
            TimeRange::OneYear,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::OneDay => "1D",
            TimeRange::OneWeek => "1W",
            TimeRange::OneMonth => "1M",
            TimeRange::SixMonths => "6M",
            TimeRange::OneYear => "1Y",
        }
    }

    pub fn days(&self) -> u32 {
        match self {
            TimeRange::OneDay => 1,
            TimeRange::OneWeek => 7,
            TimeRange::OneMonth => 30,
            TimeRange::SixMonths => 182,
            TimeRange::OneYear => 365,
        }
    }
}

pub struct TimeRangeSelector {
    pub ranges: Vec<TimeRange>,
    pub selected: usize,
}

impl TimeRangeSelector {
    pub fn new(range: TimeRange) -> Self {
        let ranges = TimeRange::all();
        let selected = ranges.iter().position(|r| *r == range).unwrap_or(4);
        Self { ranges, selected }
    }

    pub fn current(&self) -> TimeRange {
        self.ranges[self.selected]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.ranges.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = if self.selected == 0 {
            self.ranges.len() - 1
        } else {
            self.selected - 1
        };
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title("Time Range")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let text: Vec<Span> = self
            .ranges
            .iter()
            .enumerate()
            .flat_map(|(idx, range)| {
                let is_selected = idx == self.selected;
                let style = if is_selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::White)
                };
                vec![
                    Span::styled(range.label(), style),
                    if idx < self.ranges.len() - 1 {
                        Span::raw(" ")
                    } else {
                        Span::raw("")
                    },
                ]
            })
            .collect();

        let line = Line::from(text);
        let para = Paragraph::new(line).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
    }
}
