use crate::{
    error::ApiError,
    fetch::Fetcher,
    group_info::GroupInfo,
    options::{ListGroupsOption, ListOptionSet},
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    /// Query in the server's human readable syntax, e.g. `inname:test`.
    pub query: Option<String>,
    pub limit: u32,
    pub start: u32,
    pub options: ListOptionSet,
}

/// Builder for querying groups, e.g.
/// `groups.query_with("inname:test")?.with_limit(10).get()`.
///
/// Like [`crate::ListRequest`] it has a single owner, and every `get` sends
/// the current parameters again.
pub struct QueryRequest<'a> {
    filter: QueryFilter,
    fetcher: &'a dyn Fetcher<QueryFilter, Vec<GroupInfo>>,
}

impl std::fmt::Debug for QueryRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryRequest")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl<'a> QueryRequest<'a> {
    pub fn new(fetcher: &'a dyn Fetcher<QueryFilter, Vec<GroupInfo>>) -> Self {
        Self {
            filter: QueryFilter::default(),
            fetcher,
        }
    }

    /// Runs the query and returns the matched groups.
    pub fn get(&self) -> Result<Vec<GroupInfo>, ApiError> {
        self.fetcher.fetch(&self.filter)
    }

    pub fn with_query(&mut self, query: impl Into<String>) -> &mut Self {
        self.filter.query = Some(query.into());
        self
    }

    /// Limit for the returned list of groups. The server default applies when unset.
    pub fn with_limit(&mut self, limit: u32) -> &mut Self {
        self.filter.limit = limit;
        self
    }

    /// Number of groups to skip.
    pub fn with_start(&mut self, start: u32) -> &mut Self {
        self.filter.start = start;
        self
    }

    pub fn with_option(&mut self, option: ListGroupsOption) -> &mut Self {
        self.filter.options.insert(option);
        self
    }

    /// Adds `options` to the ones already set.
    pub fn with_options(&mut self, options: impl IntoIterator<Item = ListGroupsOption>) -> &mut Self {
        self.filter.options.extend(options);
        self
    }

    /// Replaces every option set so far with `options`.
    pub fn with_option_set(&mut self, options: ListOptionSet) -> &mut Self {
        self.filter.options = options;
        self
    }

    pub fn filter(&self) -> &QueryFilter {
        &self.filter
    }

    pub fn query(&self) -> Option<&str> {
        self.filter.query.as_deref()
    }

    pub fn limit(&self) -> u32 {
        self.filter.limit
    }

    pub fn start(&self) -> u32 {
        self.filter.start
    }

    pub fn options(&self) -> &ListOptionSet {
        &self.filter.options
    }
}
