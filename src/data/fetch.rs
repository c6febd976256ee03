use reqwest::Client;

use crate::data::{chart::MarketChart, coin::CoinDetail};

pub async fn fetch_coin_detail(
    client: &Client,
    base: &str,
    coin_id: &str,
) -> Result<CoinDetail, reqwest::Error> {
    let url = format!("{}/coins/{}", base, coin_id);
    client
        .get(&url)
        .send()
        .await?
        .error_for_status()?
        .json::<CoinDetail>()
        .await
}

pub async fn fetch_market_chart(
    client: &Client,
    base: &str,
    coin_id: &str,
    days: u32,
) -> Result<MarketChart, reqwest::Error> {
    let url = format!("{}/coins/{}/market_chart", base, coin_id);
    let days_str = days.to_string();
    client
        .get(&url)
        .query(&[("vs_currency", "usd"), ("days", &days_str)])
        .send()
        .await?
        .error_for_status()?
        .json::<MarketChart>()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn coin_detail_hits_coins_endpoint_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/ethereum"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Ethereum",
                "market_data": { "current_price": { "usd": 2000.0 } }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let detail = fetch_coin_detail(&client, &server.uri(), "ethereum")
            .await
            .unwrap();
        assert_eq!(detail.name.as_deref(), Some("Ethereum"));
    }

    #[tokio::test]
    async fn market_chart_sends_currency_and_days() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/bitcoin/market_chart"))
            .and(query_param("vs_currency", "usd"))
            .and(query_param("days", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prices": [[1700000000000i64, 42000.5]],
                "market_caps": [[1700000000000i64, 8.2e11]],
                "total_volumes": [[1700000000000i64, 3.1e10]]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new();
        let chart = fetch_market_chart(&client, &server.uri(), "bitcoin", 1)
            .await
            .unwrap();
        assert_eq!(chart.prices, vec![(1700000000000.0, 42000.5)]);
    }

    #[tokio::test]
    async fn not_found_error_carries_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/nope"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = Client::new();
        let err = fetch_coin_detail(&client, &server.uri(), "nope")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[tokio::test]
    async fn garbage_body_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/bitcoin/market_chart"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = Client::new();
        let result = fetch_market_chart(&client, &server.uri(), "bitcoin", 7).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn missing_series_default_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/coins/bitcoin/market_chart"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "prices": [[1.0, 2.0]]
            })))
            .mount(&server)
            .await;

        let client = Client::new();
        let chart = fetch_market_chart(&client, &server.uri(), "bitcoin", 7)
            .await
            .unwrap();
        assert_eq!(chart.prices.len(), 1);
        assert!(chart.market_caps.is_empty());
        assert!(chart.total_volumes.is_empty());
    }
}
