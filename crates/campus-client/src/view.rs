//! Per-view lifecycle state.

use crate::ClientError;

/// The only state machine a view needs: it is loading, it loaded, or it
/// failed with a message to show the user.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> ViewState<T> {
    /// Settle the view from an API call result.
    pub fn from_result(result: Result<T, ClientError>) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_loading() {
        let state: ViewState<Vec<String>> = ViewState::default();
        assert!(state.is_loading());
        assert_eq!(state.loaded(), None);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn settles_to_loaded_on_success() {
        let state = ViewState::from_result(Ok(vec!["listing".to_string()]));
        assert!(!state.is_loading());
        assert_eq!(state.loaded(), Some(&vec!["listing".to_string()]));
    }

    #[test]
    fn settles_to_failed_with_the_server_message() {
        let state: ViewState<()> = ViewState::from_result(Err(ClientError::Api {
            status: 403,
            title: "Forbidden".to_string(),
            detail: "Only the owner may modify this listing".to_string(),
        }));

        assert!(state.error().unwrap().contains("owner"));
    }
}
