use crate::config::CoinOption;
use crate::data::{CoinView, MarketChart};
use crate::ui::{CardSection, ChartPanel, StatusBar, TimeRange, TimeRangeSelector};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LayoutManager {
    pub coins: Vec<CoinOption>,
    pub selected_coin: usize,
    pub timerange: TimeRangeSelector,
    pub statusbar: StatusBar,
}

impl LayoutManager {
    pub fn new(coins: Vec<CoinOption>, selected_coin: usize, range: TimeRange) -> Self {
        let selected_coin = selected_coin.min(coins.len().saturating_sub(1));
        Self {
            coins,
            selected_coin,
            timerange: TimeRangeSelector::new(range),
            statusbar: StatusBar::new(),
        }
    }

    pub fn cursor_coin(&self) -> &CoinOption {
        &self.coins[self.selected_coin]
    }

    pub fn select_next_coin(&mut self) {
        self.selected_coin = (self.selected_coin + 1) % self.coins.len();
    }

    pub fn select_prev_coin(&mut self) {
        self.selected_coin = if self.selected_coin == 0 {
            self.coins.len() - 1
        } else {
            self.selected_coin - 1
        };
    }

    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        active_coin: &str,
        view: &CoinView,
        chart: Option<&MarketChart>,
        detail_loading: bool,
        chart_loading: bool,
    ) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        self.timerange.render(frame, main_chunks[0]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(40)])
            .split(main_chunks[1]);

        self.render_coin_list(frame, content_chunks[0], active_coin);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(12)])
            .split(content_chunks[1]);

        CardSection::render(frame, right_chunks[0], view, detail_loading);
        ChartPanel::render(frame, right_chunks[1], chart, view, chart_loading);

        self.statusbar.render(frame, main_chunks[2]);
    }

    fn render_coin_list(&self, frame: &mut Frame, area: Rect, active_coin: &str) {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(5)])
            .split(area);

        let title_block = Block::default()
            .title("Coins")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        frame.render_widget(title_block, vertical[0]);

        let items: Vec<ListItem> = self
            .coins
            .iter()
            .enumerate()
            .map(|(idx, coin)| {
                let is_cursor = idx == self.selected_coin;
                let is_active = coin.id == active_coin;
                let style = if is_active {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else if is_cursor {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::White)
                };

                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<6}", coin.symbol), style),
                    Span::styled(coin.name.clone(), Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::NONE))
            .style(Style::default().fg(Color::White));
        frame.render_widget(list, vertical[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_coins;

    #[test]
    fn coin_cursor_wraps() {
        let mut layout = LayoutManager::new(default_coins(), 0, TimeRange::OneYear);
        layout.select_prev_coin();
        assert_eq!(layout.cursor_coin().id, "tether");
        layout.select_next_coin();
        assert_eq!(layout.cursor_coin().id, "bitcoin");
    }

    #[test]
    fn out_of_range_start_is_clamped() {
        let layout = LayoutManager::new(default_coins(), 42, TimeRange::OneDay);
        assert_eq!(layout.selected_coin, 9);
    }
}
