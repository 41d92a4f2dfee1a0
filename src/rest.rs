use percent_encoding::percent_decode_str;
use reqwest::{
    blocking::{Client, RequestBuilder},
    header::ACCEPT,
    StatusCode,
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    config::Config,
    error::ApiError,
    fetch::{Fetcher, GroupsTransport},
    group_info::{GroupInfo, GroupInput, GroupMap},
    list::ListFilter,
    query::QueryFilter,
};

/// Prepended by the server to every JSON response to defeat XSSI.
const XSSI_PREFIX: &str = ")]}'";

/// Talks to the server's REST API over HTTP.
pub struct GerritClient {
    http: Client,
    base: Url,
    credentials: Option<(String, String)>,
}

impl GerritClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), config)
    }

    pub fn with_client(http: Client, config: &Config) -> Result<Self, ApiError> {
        let base = Url::parse(&config.url)?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        Ok(Self {
            http,
            base,
            credentials: config
                .credentials()
                .map(|(user, password)| (user.to_owned(), password.to_owned())),
        })
    }

    /// Builds `<base>/[a/]<segments>`. Authenticated requests go through `/a/`.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            if self.credentials.is_some() {
                path.push("a");
            }
            path.extend(segments);
        }
        url
    }

    pub fn list_url(&self, filter: &ListFilter) -> Url {
        let mut url = self.endpoint(&["groups", ""]);
        {
            let mut query = url.query_pairs_mut();
            for option in filter.options.iter() {
                query.append_pair("o", option.as_str());
            }
            for project in &filter.projects {
                query.append_pair("p", project);
            }
            for group in &filter.groups {
                query.append_pair("g", group);
            }
            if filter.visible_to_all {
                query.append_key_only("visible-to-all");
            }
            if let Some(user) = &filter.user {
                query.append_pair("u", user);
            }
            if filter.owned {
                query.append_key_only("owned");
            }
            if filter.limit > 0 {
                query.append_pair("n", &filter.limit.to_string());
            }
            if filter.start > 0 {
                query.append_pair("S", &filter.start.to_string());
            }
            if let Some(substring) = &filter.substring {
                query.append_pair("m", substring);
            }
            if let Some(suggest) = &filter.suggest {
                query.append_pair("suggest", suggest);
            }
        }
        drop_empty_query(url)
    }

    pub fn query_url(&self, filter: &QueryFilter) -> Url {
        let mut url = self.endpoint(&["groups", ""]);
        {
            let mut query = url.query_pairs_mut();
            if let Some(text) = &filter.query {
                query.append_pair("query", text);
            }
            if filter.limit > 0 {
                query.append_pair("limit", &filter.limit.to_string());
            }
            if filter.start > 0 {
                query.append_pair("start", &filter.start.to_string());
            }
            for option in filter.options.iter() {
                query.append_pair("o", option.as_str());
            }
        }
        drop_empty_query(url)
    }

    /// `id` may already be URL encoded, as `GroupInfo::id` is; it is decoded
    /// first so it ends up encoded exactly once.
    pub fn group_url(&self, id: &str) -> Url {
        let id = percent_decode_str(id).decode_utf8_lossy();
        self.endpoint(&["groups", &id])
    }

    fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match &self.credentials {
            Some((user, password)) => request.basic_auth(user, Some(password)),
            None => request,
        };
        let response = request.header(ACCEPT, "application/json").send()?;
        let status = response.status();
        log::debug!("{} {}", status, response.url());
        let body = response.text()?;
        check_status(status, body).and_then(|body| parse_body(&body))
    }
}

impl Fetcher<ListFilter, GroupMap> for GerritClient {
    fn fetch(&self, filter: &ListFilter) -> Result<GroupMap, ApiError> {
        let url = self.list_url(filter);
        log::debug!("GET {}", url);
        self.send(self.http.get(url))
    }
}

impl Fetcher<QueryFilter, Vec<GroupInfo>> for GerritClient {
    fn fetch(&self, filter: &QueryFilter) -> Result<Vec<GroupInfo>, ApiError> {
        let url = self.query_url(filter);
        log::debug!("GET {}", url);
        self.send(self.http.get(url))
    }
}

impl GroupsTransport for GerritClient {
    fn resolve_group(&self, id: &str) -> Result<GroupInfo, ApiError> {
        let url = self.group_url(id);
        log::debug!("GET {}", url);
        self.send(self.http.get(url))
    }

    fn create_group(&self, input: &GroupInput) -> Result<GroupInfo, ApiError> {
        let name = input
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or(ApiError::InvalidRequest("a new group needs a name"))?;
        let url = self.group_url(name);
        log::debug!("PUT {}", url);
        self.send(self.http.put(url).json(input))
    }
}

/// `query_pairs_mut` leaves a bare `?` behind when nothing was appended.
fn drop_empty_query(mut url: Url) -> Url {
    if url.query() == Some("") {
        url.set_query(None);
    }
    url
}

fn check_status(status: StatusCode, body: String) -> Result<String, ApiError> {
    if status.is_success() {
        return Ok(body);
    }
    let message = body.trim().to_owned();
    Err(match status {
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::CONFLICT => ApiError::Conflict(message),
        _ => ApiError::Status {
            status: status.as_u16(),
            body: message,
        },
    })
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let json = body.strip_prefix(XSSI_PREFIX).unwrap_or(body);
    Ok(serde_json::from_str(json)?)
}
