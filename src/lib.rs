//! Client for the groups REST API of a Gerrit code-review server.
//!
//! ```no_run
//! use gerrit_groups::{Config, GerritClient, GerritGroups, Groups, ListGroupsOption};
//!
//! # fn main() -> gerrit_groups::Result<()> {
//! let client = GerritClient::new(&Config::from_env()?)?;
//! let groups = GerritGroups::new(client);
//! for group in groups.list()?.with_owned(true).add_option(ListGroupsOption::Members).get()? {
//!     println!("{:?}", group.name);
//! }
//! let matched = groups.query_with("inname:test")?.with_limit(10).get()?;
//! assert!(matched.len() <= 10);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod group_info;
pub mod groups;
pub mod list;
pub mod options;
pub mod query;
pub mod rest;
#[cfg(test)]
mod testing;

pub use config::Config;
pub use error::{ApiError, Error};
pub use fetch::{Fetcher, GroupsTransport};
pub use group_info::{AccountInfo, GroupInfo, GroupInput, GroupMap, GroupOptionsInfo};
pub use groups::{GerritGroups, GroupApi, Groups, NotImplemented};
pub use list::{ListFilter, ListRequest};
pub use options::{ListGroupsOption, ListOptionSet};
pub use query::{QueryFilter, QueryRequest};
pub use rest::GerritClient;

pub type Result<T> = std::result::Result<T, Error>;
