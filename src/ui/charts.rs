use crate::data::{CoinView, MarketChart};
use crate::ui::format::{format_currency, format_large_number, format_number};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

pub const PRICE_COLOR: Color = Color::Rgb(252, 223, 3);
pub const MARKET_CAP_COLOR: Color = Color::Rgb(255, 105, 245);
pub const VOLUME_COLOR: Color = Color::Rgb(0, 255, 234);

pub struct ChartPanel;

impl ChartPanel {
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        chart: Option<&MarketChart>,
        view: &CoinView,
        loading: bool,
    ) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(9)])
            .split(area);

        render_metrics(frame, rows[0], view);

        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[1]);

        let empty = MarketChart::default();
        let chart = chart.unwrap_or(&empty);
        render_series(
            frame,
            charts[0],
            "Market Price (USD)",
            PRICE_COLOR,
            &chart.prices,
            loading,
        );
        render_series(
            frame,
            charts[1],
            "Market Cap (USD)",
            MARKET_CAP_COLOR,
            &chart.market_caps,
            loading,
        );
        render_series(
            frame,
            charts[2],
            "Total Volume",
            VOLUME_COLOR,
            &chart.total_volumes,
            loading,
        );
    }
}

fn render_metrics(frame: &mut Frame, area: Rect, view: &CoinView) {
    let metrics: [(&str, String); 5] = [
        ("24h Change", format_currency(view.price_change_24h)),
        ("Market Cap", format_large_number(view.market_cap)),
        ("Volume", format_large_number(view.total_volume)),
        ("Supply", format_large_number(view.circulating_supply)),
        ("Twitter", format_number(view.twitter_followers)),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, 5); 5])
        .split(area);

    for (idx, (title, value)) in metrics.iter().enumerate() {
        let line = Line::from(vec![
            Span::styled(format!("{}: ", title), Style::default().fg(Color::Gray)),
            Span::styled(value.clone(), Style::default().fg(Color::White)),
        ]);
        let para = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(para, columns[idx]);
    }
}

fn render_series(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    data: &[(f64, f64)],
    loading: bool,
) {
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    if data.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        let message = if loading { "Loading..." } else { "No data" };
        let para = Paragraph::new(Span::styled(message, Style::default().fg(Color::Gray)))
            .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(para, inner);
        return;
    }

    let (x_min, x_max) = data
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), (x, _)| {
            (min.min(*x), max.max(*x))
        });
    let (y_min, y_max) = data
        .iter()
        .fold((f64::MAX, f64::MIN), |(min, max), (_, y)| {
            (min.min(*y), max.max(*y))
        });

    // A flat series still needs a non-degenerate axis.
    let y_pad = ((y_max - y_min).abs()).max(y_max.abs() * 0.01).max(1.0);
    let y_bounds = if y_min == y_max {
        [y_min - y_pad, y_max + y_pad]
    } else {
        [y_min, y_max]
    };

    let dataset = Dataset::default()
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .bounds([x_min, x_max])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds(y_bounds)
                .labels(vec![
                    format_large_number(y_bounds[0]),
                    format_large_number(y_bounds[1]),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(chart, area);
}
