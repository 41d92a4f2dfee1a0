use crate::{
    error::Error,
    fetch::GroupsTransport,
    group_info::{GroupInfo, GroupInput},
    list::ListRequest,
    query::QueryRequest,
    Result,
};

/// Entry point for looking up, creating, listing and querying groups.
///
/// Every method defaults to [`Error::NotImplemented`], so an implementation
/// only provides what it supports and methods added later do not break it.
pub trait Groups {
    /// Looks up a group by name, UUID or any other identifier the server accepts.
    ///
    /// The group is read eagerly. The returned handle is a snapshot and does not
    /// see later changes made through other handles, so don't keep it around
    /// across mutations.
    fn id(&self, _id: &str) -> Result<GroupApi> {
        Err(Error::not_implemented("id"))
    }

    /// Creates a group with the given name and default options.
    fn create(&self, _name: &str) -> Result<GroupApi> {
        Err(Error::not_implemented("create"))
    }

    fn create_from(&self, _input: GroupInput) -> Result<GroupApi> {
        Err(Error::not_implemented("create_from"))
    }

    /// Starts a new request for listing groups.
    fn list(&self) -> Result<ListRequest<'_>> {
        Err(Error::not_implemented("list"))
    }

    /// Starts a new group query.
    fn query(&self) -> Result<QueryRequest<'_>> {
        Err(Error::not_implemented("query"))
    }

    /// Shortcut for `query()?.with_query(query)`.
    fn query_with(&self, _query: &str) -> Result<QueryRequest<'_>> {
        Err(Error::not_implemented("query_with"))
    }
}

/// A [`Groups`] without any operation; every call fails with
/// [`Error::NotImplemented`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NotImplemented;

impl Groups for NotImplemented {}

/// A single group, as read when the handle was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupApi {
    info: GroupInfo,
}

impl GroupApi {
    pub fn new(info: GroupInfo) -> Self {
        Self { info }
    }

    pub fn info(&self) -> &GroupInfo {
        &self.info
    }

    pub fn id(&self) -> &str {
        &self.info.id
    }

    pub fn name(&self) -> Option<&str> {
        self.info.name.as_deref()
    }

    pub fn into_info(self) -> GroupInfo {
        self.info
    }
}

/// [`Groups`] backed by a server connection.
pub struct GerritGroups<T> {
    transport: T,
}

impl<T: GroupsTransport> GerritGroups<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T: GroupsTransport> Groups for GerritGroups<T> {
    fn id(&self, id: &str) -> Result<GroupApi> {
        Ok(GroupApi::new(self.transport.resolve_group(id)?))
    }

    fn create(&self, name: &str) -> Result<GroupApi> {
        self.create_from(GroupInput::named(name))
    }

    fn create_from(&self, input: GroupInput) -> Result<GroupApi> {
        Ok(GroupApi::new(self.transport.create_group(&input)?))
    }

    fn list(&self) -> Result<ListRequest<'_>> {
        Ok(ListRequest::new(&self.transport))
    }

    fn query(&self) -> Result<QueryRequest<'_>> {
        Ok(QueryRequest::new(&self.transport))
    }

    fn query_with(&self, query: &str) -> Result<QueryRequest<'_>> {
        let mut request = self.query()?;
        request.with_query(query);
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::options::ListGroupsOption::*;
    use crate::testing::StubTransport;

    /// Supports listing only.
    struct ListOnly<'a> {
        transport: &'a StubTransport,
    }

    impl Groups for ListOnly<'_> {
        fn list(&self) -> Result<ListRequest<'_>> {
            Ok(ListRequest::new(self.transport))
        }
    }

    fn assert_not_implemented<T: std::fmt::Debug>(result: Result<T>, expected: &str) {
        match result {
            Err(Error::NotImplemented { method }) => assert_eq!(method, expected),
            other => panic!("expected {expected} to be not implemented, got {other:?}"),
        }
    }

    #[test]
    fn not_implemented_fails_every_method() {
        let groups = NotImplemented;
        assert_not_implemented(groups.id("Administrators"), "id");
        assert_not_implemented(groups.create("devs"), "create");
        assert_not_implemented(groups.create_from(GroupInput::named("devs")), "create_from");
        assert!(groups.list().unwrap_err().is_not_implemented());
        assert!(groups.query().unwrap_err().is_not_implemented());
        assert!(groups.query_with("inname:test").unwrap_err().is_not_implemented());
    }

    #[test]
    fn missing_methods_never_reach_the_transport() {
        let spy = StubTransport::with_map(r#"{"alice": {"id": "u1"}}"#);
        let groups = ListOnly { transport: &spy };

        assert_not_implemented(groups.id("alice"), "id");
        assert_not_implemented(groups.create("bob"), "create");
        assert!(groups.query_with("inname:a").unwrap_err().is_not_implemented());
        assert_eq!(spy.calls(), 0);

        assert_eq!(groups.list().unwrap().get().unwrap().len(), 1);
        assert_eq!(spy.calls(), 1);
    }

    #[test]
    fn query_with_sets_the_query() {
        let transport = StubTransport::with_list("[]");
        let groups = GerritGroups::new(transport);

        groups.query_with("inname:test").unwrap().with_limit(10).get().unwrap();

        let sent = groups.transport().last_query().unwrap();
        assert_eq!(sent.query.as_deref(), Some("inname:test"));
        assert_eq!(sent.limit, 10);
        assert_eq!(sent.start, 0);
        assert!(sent.options.is_empty());
    }

    #[test]
    fn query_with_matches_query_then_with_query() {
        let groups = GerritGroups::new(StubTransport::default());
        let shortcut = groups.query_with("owner:Administrators").unwrap();
        let mut longhand = groups.query().unwrap();
        longhand.with_query("owner:Administrators");
        assert_eq!(shortcut.filter(), longhand.filter());
    }

    #[test]
    fn list_and_query_do_not_call_the_transport() {
        let groups = GerritGroups::new(StubTransport::default());
        let mut list = groups.list().unwrap();
        list.with_project("demo").add_option(Includes);
        let mut query = groups.query().unwrap();
        query.with_option(Members);
        assert_eq!(groups.transport().calls(), 0);
    }

    #[test]
    fn each_list_starts_empty() {
        let groups = GerritGroups::new(StubTransport::default());
        let mut first = groups.list().unwrap();
        first.with_project("demo").with_owned(true);
        let second = groups.list().unwrap();
        assert!(second.projects().is_empty());
        assert!(!second.owned());
    }

    #[test]
    fn id_returns_a_snapshot() {
        let groups = GerritGroups::new(StubTransport::with_map(
            r#"{"Administrators": {"id": "6a1e70e1", "description": "Gerrit Site Administrators"}}"#,
        ));
        let handle = groups.id("Administrators").unwrap();
        assert_eq!(handle.id(), "6a1e70e1");
        assert_eq!(handle.name(), Some("Administrators"));
        assert_eq!(
            handle.info().description.as_deref(),
            Some("Gerrit Site Administrators")
        );
        assert_eq!(groups.transport().resolved(), vec!["Administrators".to_owned()]);
    }

    #[test]
    fn id_propagates_not_found() {
        let groups = GerritGroups::new(StubTransport::default());
        let err = groups.id("nobody").unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::NotFound(ref id)) if id == "nobody"));
    }

    #[test]
    fn create_by_name_sends_only_the_name() {
        let groups = GerritGroups::new(StubTransport::default());
        let handle = groups.create("MyProject-Committers").unwrap();
        assert_eq!(handle.name(), Some("MyProject-Committers"));
        assert_eq!(
            groups.transport().created(),
            vec![GroupInput::named("MyProject-Committers")]
        );
    }

    #[test]
    fn create_from_passes_the_input_through() {
        let groups = GerritGroups::new(StubTransport::default());
        let input = GroupInput {
            name: Some("reviewers".to_owned()),
            description: Some("Code reviewers".to_owned()),
            visible_to_all: Some(true),
            members: vec!["jroe".to_owned()],
            ..Default::default()
        };
        let handle = groups.create_from(input.clone()).unwrap();
        assert_eq!(handle.info().description.as_deref(), Some("Code reviewers"));
        assert_eq!(groups.transport().created(), vec![input]);
    }

    #[test]
    fn create_propagates_conflict() {
        let groups = GerritGroups::new(StubTransport::failing(ApiError::Conflict(
            "group 'devs' already exists".to_owned(),
        )));
        let err = groups.create("devs").unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Conflict(_))));
    }
}
