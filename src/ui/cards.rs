use crate::data::CoinView;
use crate::ui::format::{format_currency, format_percentage};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct CardSection;

impl CardSection {
    pub fn render(frame: &mut Frame, area: Rect, view: &CoinView, loading: bool) {
        let title = if view.name.is_empty() {
            "Overview".to_string()
        } else {
            format!("{} Overview", view.name)
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(inner);

        let change_color = if view.market_cap_change_24h >= 0.0 {
            Color::Green
        } else {
            Color::Red
        };

        let top: [(&str, String, Color); 4] = [
            (
                "Current Price",
                format_currency(view.current_price),
                Color::White,
            ),
            (
                "Market Cap 24h",
                format_percentage(view.market_cap_change_24h),
                change_color,
            ),
            (
                "All Time High",
                format_currency(view.all_time_high),
                Color::Green,
            ),
            (
                "All Time Low",
                format_currency(view.all_time_low),
                Color::Red,
            ),
        ];
        let bottom: [(&str, String, Color); 4] = [
            (
                "Sentiment",
                format_percentage(view.sentiment),
                Color::Yellow,
            ),
            ("24h High", format_currency(view.high_24h), Color::Green),
            ("24h Low", format_currency(view.low_24h), Color::Red),
            (
                "24h Price Change",
                format_currency(view.price_change_24h),
                if view.price_change_24h >= 0.0 {
                    Color::Green
                } else {
                    Color::Red
                },
            ),
        ];

        render_card_row(frame, rows[0], &top, loading);
        render_card_row(frame, rows[1], &bottom, loading);
    }
}

fn render_card_row(frame: &mut Frame, area: Rect, cards: &[(&str, String, Color)], loading: bool) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, cards.len() as u32);
            cards.len()
        ])
        .split(area);

    for (idx, (title, value, color)) in cards.iter().enumerate() {
        let block = Block::default()
            .title(*title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(columns[idx]);
        frame.render_widget(block, columns[idx]);

        let text = if loading {
            Line::from(Span::styled("...", Style::default().fg(Color::Gray)))
        } else {
            Line::from(Span::styled(
                value.clone(),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            ))
        };
        let para = Paragraph::new(text).alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
    }
}
