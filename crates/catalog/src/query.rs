pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Parameters of a single listing request. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub search_term: String,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ListQuery {
    pub fn new(limit: u32) -> Self {
        Self {
            search_term: String::new(),
            page: 1,
            limit,
        }
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// URL query pairs; `query_term` is omitted for an empty search term
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("limit", self.limit.to_string()),
            ("page", self.page.to_string()),
        ];
        if !self.search_term.is_empty() {
            pairs.push(("query_term", self.search_term.clone()));
        }
        pairs
    }
}
