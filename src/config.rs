use crate::ui::TimeRange;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const API_BASE: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_COIN: &str = "bitcoin";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinOption {
    pub id: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub coins: Vec<CoinOption>,
    pub selected_coin: usize,
    pub coin_id: String,
    pub time_range: TimeRange,
}

impl Default for AppConfig {
    fn default() -> Self {
        let coins = default_coins();
        Self {
            api_base: api_base_from_env(),
            coin_id: DEFAULT_COIN.to_string(),
            selected_coin: 0,
            coins,
            time_range: TimeRange::OneYear,
        }
    }
}

impl AppConfig {
    pub fn sanitized(mut self) -> Self {
        if self.coins.is_empty() {
            self.coins = default_coins();
        }

        if self.selected_coin >= self.coins.len() {
            self.selected_coin = self.coins.len().saturating_sub(1);
        }

        if !self.coins.iter().any(|c| c.id == self.coin_id) {
            self.coin_id = self.coins[self.selected_coin].id.clone();
        }

        if self.api_base.is_empty() {
            self.api_base = api_base_from_env();
        }

        self
    }
}

fn api_base_from_env() -> String {
    std::env::var("COINBOARD_API_BASE").unwrap_or_else(|_| API_BASE.to_string())
}

fn coin(id: &str, name: &str, symbol: &str) -> CoinOption {
    CoinOption {
        id: id.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
    }
}

pub fn default_coins() -> Vec<CoinOption> {
    vec![
        coin("bitcoin", "Bitcoin", "BTC"),
        coin("ethereum", "Ethereum", "ETH"),
        coin("binancecoin", "Binance Coin", "BNB"),
        coin("solana", "Solana", "SOL"),
        coin("cardano", "Cardano", "ADA"),
        coin("ripple", "Ripple", "XRP"),
        coin("dogecoin", "Dogecoin", "DOGE"),
        coin("avalanche-2", "Avalanche", "AVAX"),
        coin("decentraland", "Decentraland", "MANA"),
        coin("tether", "Tether", "USDT"),
    ]
}

pub fn config_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".coinboard.json")
}

pub fn load_config(path: &Path) -> AppConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(_) => return AppConfig::default(),
    };

    serde_json::from_str::<AppConfig>(&contents)
        .map(|cfg| cfg.sanitized())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_starts_on_bitcoin_one_year() {
        let config = AppConfig::default();
        assert_eq!(config.coin_id, "bitcoin");
        assert_eq!(config.time_range, TimeRange::OneYear);
        assert_eq!(config.coins.len(), 10);
    }

    #[test]
    fn sanitized_repairs_out_of_range_selection() {
        let config = AppConfig {
            selected_coin: 99,
            coin_id: "not-a-coin".to_string(),
            ..AppConfig::default()
        }
        .sanitized();

        assert_eq!(config.selected_coin, 9);
        assert_eq!(config.coin_id, "tether");
    }

    #[test]
    fn sanitized_restores_empty_coin_list() {
        let config = AppConfig {
            coins: Vec::new(),
            ..AppConfig::default()
        }
        .sanitized();
        assert_eq!(config.coins.len(), 10);
    }

    #[test]
    fn missing_config_file_falls_back_to_defaults() {
        let config = load_config(Path::new("/definitely/not/here.json"));
        assert_eq!(config.coin_id, "bitcoin");
    }
}
