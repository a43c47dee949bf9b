use log::warn;
use serde::{Deserialize, Serialize};

use crate::api::ApiError;

pub const DEMO_DATA_WARNING: &str = "Using demo data. Live data unavailable.";

/// Screen data tagged with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Feed<T> {
    Live(T),
    Demo(T),
}

impl<T> Feed<T> {
    pub fn data(&self) -> &T {
        match self {
            Feed::Live(data) | Feed::Demo(data) => data,
        }
    }

    pub fn into_data(self) -> T {
        match self {
            Feed::Live(data) | Feed::Demo(data) => data,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, Feed::Demo(_))
    }

    pub fn warning(&self) -> Option<&'static str> {
        self.is_demo().then_some(DEMO_DATA_WARNING)
    }
}

/// Substitutes demo data for any failure except a rejected session, which the
/// caller must see so the guard can redirect.
pub fn live_or_demo<T>(
    result: Result<T, ApiError>,
    demo: impl FnOnce() -> T,
) -> Result<Feed<T>, ApiError> {
    match result {
        Ok(data) => Ok(Feed::Live(data)),
        Err(err) if err.is_auth_rejected() => Err(err),
        Err(err) => {
            warn!("Falling back to demo data: {}", err);
            Ok(Feed::Demo(demo()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_result_passes_through() {
        let feed = live_or_demo(Ok(vec![1, 2]), || vec![9]).unwrap();
        assert_eq!(feed, Feed::Live(vec![1, 2]));
        assert!(feed.warning().is_none());
    }

    #[test]
    fn transport_and_server_errors_fall_back_to_demo() {
        for err in [
            ApiError::request_failed("offline"),
            ApiError::http(500, "boom"),
            ApiError::invalid_response("bad json"),
        ] {
            let feed = live_or_demo(Err(err), || vec![9]).unwrap();
            assert!(feed.is_demo());
            assert_eq!(feed.warning(), Some(DEMO_DATA_WARNING));
            assert_eq!(feed.into_data(), vec![9]);
        }
    }

    #[test]
    fn auth_rejection_never_falls_back() {
        let mut demo_called = false;
        let result = live_or_demo::<Vec<i32>>(Err(ApiError::forbidden("nope")), || {
            demo_called = true;
            vec![]
        });
        assert!(result.unwrap_err().is_auth_rejected());
        assert!(!demo_called);
    }
}
