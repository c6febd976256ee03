pub mod chart;
pub mod coin;
pub mod fetch;
pub mod state;

pub use chart::MarketChart;
pub use coin::{CoinDetail, CoinView};
pub use fetch::*;
pub use state::{FetchState, Fetcher};
