//! Tests for configuration

#[cfg(test)]
mod tests {
    use super::super::config::*;

    #[test]
    fn test_provider_config_default() {
        let config = ProviderConfig::default();
        assert!(config.base_url.contains("query1.finance.yahoo.com"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.user_agent, "Mozilla/5.0");
    }

    #[test]
    fn test_model_config_default() {
        let config = ModelConfig::default();
        assert_eq!(config.learning_rate, 0.05);
        assert_eq!(config.max_iter, 200);
        assert_eq!(config.tolerance, 1e-6);
        assert_eq!(config.l2, 0.01);
    }

    #[test]
    fn test_signal_config_default() {
        let config = SignalConfig::default();
        assert_eq!(config.buy_threshold, 0.55);
        assert_eq!(config.sell_threshold, 0.45);
    }

    #[test]
    fn test_watchlist_config_default() {
        let config = WatchlistConfig::default();
        assert_eq!(config.tickers, vec!["BTC-USD", "TSLA"]);
        assert_eq!(config.period_days, 400);
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.signal.buy_threshold, 0.55);
        assert_eq!(config.model.max_iter, 200);
        assert_eq!(config.watchlist.period_days, 400);
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let toml_str = r#"
[signal]
buy_threshold = 0.60
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.signal.buy_threshold, 0.60);
        assert_eq!(config.signal.sell_threshold, 0.45);
    }

    #[test]
    fn test_full_override() {
        let toml_str = r#"
[provider]
base_url = "http://localhost:9999/chart"
timeout_secs = 5

[model]
learning_rate = 0.1
max_iter = 500

[watchlist]
tickers = ["ETH-USD"]
period_days = 180
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:9999/chart");
        assert_eq!(config.provider.timeout_secs, 5);
        assert_eq!(config.model.learning_rate, 0.1);
        assert_eq!(config.model.max_iter, 500);
        assert_eq!(config.watchlist.tickers, vec!["ETH-USD"]);
        assert_eq!(config.watchlist.period_days, 180);
    }
}
