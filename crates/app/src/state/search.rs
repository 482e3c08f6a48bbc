use dioxus::prelude::*;

/// Free-text filter keyword shared between the topbar search box and the
/// list pages. Replaced wholesale on every keystroke; no debouncing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchFilter {
    keyword: String,
}

impl SearchFilter {
    /// Replace the keyword unconditionally, empty string included.
    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn clear_keyword(&mut self) {
        self.set_keyword("");
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }
}

/// Reactive wrapper provided through context, mirroring [`SessionState`].
///
/// [`SessionState`]: crate::state::session::SessionState
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchState {
    inner: Signal<SearchFilter>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(SearchFilter::default()),
        }
    }

    pub fn keyword(&self) -> String {
        self.inner.read().keyword().to_string()
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.inner.write().set_keyword(keyword);
    }

    pub fn clear_keyword(&mut self) {
        self.inner.write().clear_keyword();
    }
}

/// Hook to access the search state.
pub fn use_search() -> SearchState {
    use_context::<SearchState>()
}
