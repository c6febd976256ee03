use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoinDetail {
    pub name: Option<String>,
    pub sentiment_votes_up_percentage: Option<f64>,
    pub market_data: Option<MarketData>,
    pub community_data: Option<CommunityData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketData {
    pub current_price: Option<UsdQuote>,
    pub market_cap_change_percentage_24h: Option<f64>,
    pub ath: Option<UsdQuote>,
    pub atl: Option<UsdQuote>,
    pub high_24h: Option<UsdQuote>,
    pub low_24h: Option<UsdQuote>,
    pub price_change_24h_in_currency: Option<UsdQuote>,
    pub market_cap: Option<UsdQuote>,
    pub total_volume: Option<UsdQuote>,
    pub circulating_supply: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommunityData {
    pub twitter_followers: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct UsdQuote {
    pub usd: Option<f64>,
}

/// Flat, display-ready projection of a `CoinDetail`. Every field has a
/// zero/empty default so a partially populated payload still renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoinView {
    pub name: String,
    pub current_price: f64,
    pub market_cap_change_24h: f64,
    pub all_time_high: f64,
    pub all_time_low: f64,
    pub sentiment: f64,
    pub high_24h: f64,
    pub low_24h: f64,
    pub price_change_24h: f64,
    pub market_cap: f64,
    pub total_volume: f64,
    pub circulating_supply: f64,
    pub twitter_followers: f64,
}

impl CoinView {
    pub fn derive(detail: &CoinDetail) -> Self {
        let market = detail.market_data.as_ref();
        let community = detail.community_data.as_ref();
        Self {
            name: detail.name.clone().unwrap_or_default(),
            current_price: usd(market.and_then(|m| m.current_price)),
            market_cap_change_24h: num(market.and_then(|m| m.market_cap_change_percentage_24h)),
            all_time_high: usd(market.and_then(|m| m.ath)),
            all_time_low: usd(market.and_then(|m| m.atl)),
            sentiment: num(detail.sentiment_votes_up_percentage),
            high_24h: usd(market.and_then(|m| m.high_24h)),
            low_24h: usd(market.and_then(|m| m.low_24h)),
            price_change_24h: usd(market.and_then(|m| m.price_change_24h_in_currency)),
            market_cap: usd(market.and_then(|m| m.market_cap)),
            total_volume: usd(market.and_then(|m| m.total_volume)),
            circulating_supply: num(market.and_then(|m| m.circulating_supply)),
            twitter_followers: num(community.and_then(|c| c.twitter_followers)),
        }
    }
}

fn usd(quote: Option<UsdQuote>) -> f64 {
    num(quote.and_then(|q| q.usd))
}

fn num(value: Option<f64>) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(0.0)
}
