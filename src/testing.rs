//! In-memory transport used by the unit tests.

use std::cell::{Cell, RefCell};

use crate::{
    error::ApiError,
    fetch::{Fetcher, GroupsTransport},
    group_info::{GroupInfo, GroupInput, GroupMap},
    list::ListFilter,
    query::QueryFilter,
};

/// Answers every call with canned data and records what it was asked.
#[derive(Default)]
pub struct StubTransport {
    map: GroupMap,
    list: Vec<GroupInfo>,
    failure: RefCell<Option<ApiError>>,
    list_filters: RefCell<Vec<ListFilter>>,
    query_filters: RefCell<Vec<QueryFilter>>,
    created: RefCell<Vec<GroupInput>>,
    resolved: RefCell<Vec<String>>,
    calls: Cell<usize>,
}

impl StubTransport {
    pub fn with_map(json: &str) -> Self {
        Self {
            map: serde_json::from_str(json).unwrap(),
            ..Default::default()
        }
    }

    pub fn with_list(json: &str) -> Self {
        Self {
            list: serde_json::from_str(json).unwrap(),
            ..Default::default()
        }
    }

    /// The next call fails with `error`.
    pub fn failing(error: ApiError) -> Self {
        Self {
            failure: RefCell::new(Some(error)),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn list_calls(&self) -> usize {
        self.list_filters.borrow().len()
    }

    pub fn last_list(&self) -> Option<ListFilter> {
        self.list_filters.borrow().last().cloned()
    }

    pub fn last_query(&self) -> Option<QueryFilter> {
        self.query_filters.borrow().last().cloned()
    }

    pub fn created(&self) -> Vec<GroupInput> {
        self.created.borrow().clone()
    }

    pub fn resolved(&self) -> Vec<String> {
        self.resolved.borrow().clone()
    }

    fn record(&self) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        match self.failure.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Fetcher<ListFilter, GroupMap> for StubTransport {
    fn fetch(&self, filter: &ListFilter) -> Result<GroupMap, ApiError> {
        self.list_filters.borrow_mut().push(filter.clone());
        self.record()?;
        Ok(self.map.clone())
    }
}

impl Fetcher<QueryFilter, Vec<GroupInfo>> for StubTransport {
    fn fetch(&self, filter: &QueryFilter) -> Result<Vec<GroupInfo>, ApiError> {
        self.query_filters.borrow_mut().push(filter.clone());
        self.record()?;
        Ok(self.list.clone())
    }
}

impl GroupsTransport for StubTransport {
    fn resolve_group(&self, id: &str) -> Result<GroupInfo, ApiError> {
        self.resolved.borrow_mut().push(id.to_owned());
        self.record()?;
        self.map
            .iter()
            .find(|(name, group)| name.as_str() == id || group.id == id)
            .map(|(name, group)| GroupInfo {
                name: Some(name.clone()),
                ..group.clone()
            })
            .ok_or_else(|| ApiError::NotFound(id.to_owned()))
    }

    fn create_group(&self, input: &GroupInput) -> Result<GroupInfo, ApiError> {
        self.created.borrow_mut().push(input.clone());
        self.record()?;
        Ok(GroupInfo {
            id: format!("uuid-{}", self.created.borrow().len()),
            name: input.name.clone(),
            description: input.description.clone(),
            ..Default::default()
        })
    }
}
