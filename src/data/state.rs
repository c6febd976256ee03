use chrono::{DateTime, Local};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Failed(String),
}

/// One fetcher's status plus the last payload it successfully loaded. The
/// payload and timestamp survive later Loading/Failed transitions so the UI
/// can keep showing stale data next to an error or a refresh spinner.
#[derive(Debug, Default)]
pub struct Fetcher<T> {
    pub state: FetchState,
    pub data: Option<T>,
    pub last_updated: Option<DateTime<Local>>,
}

impl<T> Fetcher<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::Idle,
            data: None,
            last_updated: None,
        }
    }

    pub fn begin(&mut self) {
        self.state = FetchState::Loading;
    }

    pub fn resolve(&mut self, result: Result<T, String>) {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.last_updated = Some(Local::now());
                self.state = FetchState::Success;
            }
            Err(message) => {
                self.state = FetchState::Failed(message);
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == FetchState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_and_empty() {
        let fetcher: Fetcher<u32> = Fetcher::new();
        assert_eq!(fetcher.state, FetchState::Idle);
        assert!(fetcher.data.is_none());
        assert!(fetcher.last_updated.is_none());
    }

    #[test]
    fn success_records_payload_and_timestamp() {
        let mut fetcher = Fetcher::new();
        fetcher.begin();
        assert!(fetcher.is_loading());

        fetcher.resolve(Ok(7));
        assert_eq!(fetcher.state, FetchState::Success);
        assert_eq!(fetcher.data, Some(7));
        assert!(fetcher.last_updated.is_some());
    }

    #[test]
    fn failure_keeps_previous_payload() {
        let mut fetcher = Fetcher::new();
        fetcher.begin();
        fetcher.resolve(Ok(7));
        let updated = fetcher.last_updated;

        fetcher.begin();
        fetcher.resolve(Err("HTTP status client error (404 Not Found)".to_string()));
        assert!(fetcher.error().unwrap().contains("404"));
        assert_eq!(fetcher.data, Some(7));
        assert_eq!(fetcher.last_updated, updated);
    }

    #[test]
    fn new_fetch_keeps_timestamp_while_loading() {
        let mut fetcher = Fetcher::new();
        fetcher.resolve(Ok(1));
        let updated = fetcher.last_updated;

        fetcher.begin();
        assert!(fetcher.is_loading());
        assert_eq!(fetcher.last_updated, updated);
        assert_eq!(fetcher.data, Some(1));
    }

    #[test]
    fn failed_recovers_on_next_success() {
        let mut fetcher = Fetcher::new();
        fetcher.begin();
        fetcher.resolve(Err("network error".to_string()));
        assert!(matches!(fetcher.state, FetchState::Failed(_)));

        fetcher.begin();
        fetcher.resolve(Ok(2));
        assert_eq!(fetcher.state, FetchState::Success);
        assert_eq!(fetcher.data, Some(2));
    }
}
