use serde::Deserialize;

/// Historical series for one coin: (timestamp-ms, value) points. Empty
/// series are valid and render as a placeholder.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketChart {
    #[serde(default)]
    pub prices: Vec<(f64, f64)>,
    #[serde(default)]
    pub market_caps: Vec<(f64, f64)>,
    #[serde(default)]
    pub total_volumes: Vec<(f64, f64)>,
}

impl MarketChart {
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty() && self.market_caps.is_empty() && self.total_volumes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_parallel_series() {
        let chart: MarketChart = serde_json::from_value(json!({
            "prices": [[1700000000000i64, 42000.0], [1700000060000i64, 42100.0]],
            "market_caps": [[1700000000000i64, 8.0e11]],
            "total_volumes": [[1700000000000i64, 2.5e10]]
        }))
        .unwrap();

        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[1], (1700000060000.0, 42100.0));
        assert_eq!(chart.market_caps.len(), 1);
        assert!(!chart.is_empty());
    }

    #[test]
    fn empty_object_is_an_empty_chart() {
        let chart: MarketChart = serde_json::from_value(json!({})).unwrap();
        assert!(chart.is_empty());
    }
}
