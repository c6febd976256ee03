use crate::config::AppConfig;
use crate::data::{
    fetch_coin_detail, fetch_market_chart, CoinDetail, CoinView, Fetcher, MarketChart,
};
use crate::ui::LayoutManager;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use reqwest::Client;
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug)]
pub enum FetchMsg {
    Detail(Result<CoinDetail, String>),
    Chart(Result<MarketChart, String>),
}

pub struct App {
    pub api_base: String,
    pub coin_id: String,
    pub detail: Fetcher<CoinDetail>,
    pub chart: Fetcher<MarketChart>,
    pub view: CoinView,
    pub layout: LayoutManager,
    pub client: Client,
    pub tx: mpsc::Sender<FetchMsg>,
    pub rx: mpsc::Receiver<FetchMsg>,
    pub quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let (tx, rx) = mpsc::channel(32);
        Self {
            api_base: config.api_base,
            coin_id: config.coin_id,
            detail: Fetcher::new(),
            chart: Fetcher::new(),
            view: CoinView::default(),
            layout: LayoutManager::new(config.coins, config.selected_coin, config.time_range),
            client: Client::new(),
            tx,
            rx,
            quit: false,
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.trigger_detail();
        self.trigger_chart();

        while !self.quit {
            terminal.draw(|frame| {
                let area = frame.area();
                render(
                    &mut self.layout,
                    frame,
                    area,
                    &self.coin_id,
                    &self.view,
                    &self.detail,
                    &self.chart,
                );
            })?;

            while let Ok(msg) = self.rx.try_recv() {
                self.on_message(msg);
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.on_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn on_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.layout.select_prev_coin(),
            KeyCode::Down | KeyCode::Char('j') => self.layout.select_next_coin(),
            KeyCode::Enter => self.activate_cursor_coin(),
            KeyCode::Left | KeyCode::Char('h') => {
                self.layout.timerange.select_prev();
                self.trigger_chart();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.layout.timerange.select_next();
                self.trigger_chart();
            }
            KeyCode::Char('r') => self.trigger_detail(),
            _ => {}
        }
    }

    pub fn activate_cursor_coin(&mut self) {
        let id = self.layout.cursor_coin().id.clone();
        if id == self.coin_id {
            return;
        }
        self.coin_id = id;
        self.trigger_detail();
        self.trigger_chart();
    }

    pub fn trigger_detail(&mut self) {
        if self.coin_id.is_empty() {
            return;
        }
        self.detail.begin();

        let client = self.client.clone();
        let base = self.api_base.clone();
        let coin_id = self.coin_id.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch_coin_detail(&client, &base, &coin_id)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(FetchMsg::Detail(result)).await;
        });
    }

    pub fn trigger_chart(&mut self) {
        if self.coin_id.is_empty() {
            return;
        }
        self.chart.begin();

        let client = self.client.clone();
        let base = self.api_base.clone();
        let coin_id = self.coin_id.clone();
        let days = self.layout.timerange.current().days();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = fetch_market_chart(&client, &base, &coin_id, days)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(FetchMsg::Chart(result)).await;
        });
    }

    pub fn on_message(&mut self, msg: FetchMsg) {
        match msg {
            FetchMsg::Detail(result) => {
                self.detail.resolve(result);
                // Recomputed wholesale on every new payload.
                if let Some(detail) = &self.detail.data {
                    self.view = CoinView::derive(detail);
                }
            }
            FetchMsg::Chart(result) => self.chart.resolve(result),
        }
    }
}

fn render(
    layout: &mut LayoutManager,
    frame: &mut Frame,
    area: ratatui::layout::Rect,
    coin_id: &str,
    view: &CoinView,
    detail: &Fetcher<CoinDetail>,
    chart: &Fetcher<MarketChart>,
) {
    layout.statusbar.loading = detail.is_loading() || chart.is_loading();
    layout.statusbar.error = detail
        .error()
        .or_else(|| chart.error())
        .map(|e| e.to_string());
    layout.statusbar.last_updated = detail.last_updated;

    layout.render(
        frame,
        area,
        coin_id,
        view,
        chart.data.as_ref(),
        detail.is_loading(),
        chart.is_loading(),
    );
}
