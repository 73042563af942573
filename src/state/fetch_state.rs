//! Lifecycle state of a data-loading view.

/// Tagged lifecycle state of one view's data.
///
/// `Loaded`, `Failed` and `NotFound` are terminal: leaving them requires
/// mounting the view again.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Not yet mounted
    Idle,
    /// Fetch in flight
    Loading,
    /// Data arrived
    Loaded(T),
    /// A fetch failed; the message is shown verbatim
    Failed(String),
    /// The fetch succeeded but returned no record
    NotFound,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Idle
    }
}

impl<T> FetchState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, FetchState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// Whether the state can no longer change without a remount.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            FetchState::Loaded(_) | FetchState::Failed(_) | FetchState::NotFound
        )
    }

    /// The loaded payload, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if any.
    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logging.
    pub fn label(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Loaded(_) => "loaded",
            FetchState::Failed(_) => "failed",
            FetchState::NotFound => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: FetchState<u32> = FetchState::default();
        assert!(state.is_idle());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_accessors() {
        let loaded = FetchState::Loaded(5);
        assert_eq!(loaded.loaded(), Some(&5));
        assert_eq!(loaded.error(), None);
        assert!(loaded.is_terminal());

        let failed: FetchState<u32> = FetchState::Failed("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.loaded(), None);
        assert!(failed.is_terminal());

        let not_found: FetchState<u32> = FetchState::NotFound;
        assert!(not_found.is_terminal());

        let loading: FetchState<u32> = FetchState::Loading;
        assert!(loading.is_loading());
        assert!(!loading.is_terminal());
    }

    #[test]
    fn test_labels() {
        assert_eq!(FetchState::<()>::Idle.label(), "idle");
        assert_eq!(FetchState::<()>::Loading.label(), "loading");
        assert_eq!(FetchState::Loaded(()).label(), "loaded");
        assert_eq!(FetchState::<()>::Failed(String::new()).label(), "failed");
        assert_eq!(FetchState::<()>::NotFound.label(), "not_found");
    }
}
