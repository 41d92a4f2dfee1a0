use crate::{
    error::ApiError,
    group_info::{GroupInfo, GroupInput, GroupMap},
    list::ListFilter,
    query::QueryFilter,
};

/// Issues the request described by a filter and returns the server's answer.
///
/// This is the only place the request builders touch the network; anything
/// from a real HTTP client to an in-memory stub can sit behind it.
pub trait Fetcher<F, R> {
    fn fetch(&self, filter: &F) -> Result<R, ApiError>;
}

/// Everything the groups facade needs from a server connection.
pub trait GroupsTransport:
    Fetcher<ListFilter, GroupMap> + Fetcher<QueryFilter, Vec<GroupInfo>>
{
    /// Reads a group by name, UUID or legacy numeric id.
    fn resolve_group(&self, id: &str) -> Result<GroupInfo, ApiError>;

    fn create_group(&self, input: &GroupInput) -> Result<GroupInfo, ApiError>;
}
