use crate::{
    error::ApiError,
    fetch::Fetcher,
    group_info::{GroupInfo, GroupMap},
    options::{ListGroupsOption, ListOptionSet},
};

/// Parameters of a group listing. A `limit` or `start` of 0 leaves the
/// server default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub options: ListOptionSet,
    pub projects: Vec<String>,
    pub groups: Vec<String>,
    pub visible_to_all: bool,
    pub user: Option<String>,
    pub owned: bool,
    pub limit: u32,
    pub start: u32,
    pub substring: Option<String>,
    pub suggest: Option<String>,
}

/// Builder for listing groups.
///
/// Setters return the same builder so calls can be chained. The request is
/// only sent by [`ListRequest::get`] or [`ListRequest::get_as_map`]; both can
/// be called repeatedly and each call sends the current parameters again.
///
/// A builder has a single owner and is not synchronized.
pub struct ListRequest<'a> {
    filter: ListFilter,
    fetcher: &'a dyn Fetcher<ListFilter, GroupMap>,
}

impl std::fmt::Debug for ListRequest<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListRequest")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl<'a> ListRequest<'a> {
    pub fn new(fetcher: &'a dyn Fetcher<ListFilter, GroupMap>) -> Self {
        Self {
            filter: ListFilter::default(),
            fetcher,
        }
    }

    /// Fetches the groups and returns them in the order the server listed them.
    pub fn get(&self) -> Result<Vec<GroupInfo>, ApiError> {
        Ok(name_from_keys(self.get_as_map()?))
    }

    /// Fetches the groups keyed by name. The values carry no `name`.
    pub fn get_as_map(&self) -> Result<GroupMap, ApiError> {
        self.fetcher.fetch(&self.filter)
    }

    pub fn add_option(&mut self, option: ListGroupsOption) -> &mut Self {
        self.filter.options.insert(option);
        self
    }

    pub fn add_options(&mut self, options: impl IntoIterator<Item = ListGroupsOption>) -> &mut Self {
        self.filter.options.extend(options);
        self
    }

    pub fn with_project(&mut self, project: impl Into<String>) -> &mut Self {
        self.filter.projects.push(project.into());
        self
    }

    pub fn add_group(&mut self, uuid: impl Into<String>) -> &mut Self {
        self.filter.groups.push(uuid.into());
        self
    }

    pub fn with_visible_to_all(&mut self, visible: bool) -> &mut Self {
        self.filter.visible_to_all = visible;
        self
    }

    pub fn with_user(&mut self, user: impl Into<String>) -> &mut Self {
        self.filter.user = Some(user.into());
        self
    }

    pub fn with_owned(&mut self, owned: bool) -> &mut Self {
        self.filter.owned = owned;
        self
    }

    pub fn with_limit(&mut self, limit: u32) -> &mut Self {
        self.filter.limit = limit;
        self
    }

    pub fn with_start(&mut self, start: u32) -> &mut Self {
        self.filter.start = start;
        self
    }

    pub fn with_substring(&mut self, substring: impl Into<String>) -> &mut Self {
        self.filter.substring = Some(substring.into());
        self
    }

    pub fn with_suggest(&mut self, suggest: impl Into<String>) -> &mut Self {
        self.filter.suggest = Some(suggest.into());
        self
    }

    pub fn filter(&self) -> &ListFilter {
        &self.filter
    }

    pub fn options(&self) -> &ListOptionSet {
        &self.filter.options
    }

    pub fn projects(&self) -> &[String] {
        &self.filter.projects
    }

    pub fn groups(&self) -> &[String] {
        &self.filter.groups
    }

    pub fn visible_to_all(&self) -> bool {
        self.filter.visible_to_all
    }

    pub fn user(&self) -> Option<&str> {
        self.filter.user.as_deref()
    }

    pub fn owned(&self) -> bool {
        self.filter.owned
    }

    pub fn limit(&self) -> u32 {
        self.filter.limit
    }

    pub fn start(&self) -> u32 {
        self.filter.start
    }

    pub fn substring(&self) -> Option<&str> {
        self.filter.substring.as_deref()
    }

    pub fn suggest(&self) -> Option<&str> {
        self.filter.suggest.as_deref()
    }
}

/// The list endpoint keys groups by name and drops `name` from the values;
/// put it back.
fn name_from_keys(map: GroupMap) -> Vec<GroupInfo> {
    map.into_iter()
        .map(|(name, mut group)| {
            group.name = Some(name);
            group
        })
        .collect()
}
