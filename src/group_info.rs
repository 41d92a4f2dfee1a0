use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Groups keyed by name, in the order the server listed them.
pub type GroupMap = IndexMap<String, GroupInfo>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GroupInfo {
    /// The URL encoded UUID of the group.
    pub id: String,
    /// The name of the group. Left out by the server when groups are listed as a map.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// URL to information about the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub options: GroupOptionsInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The numeric id of the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,
    /// The name of the owner group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    /// The URL encoded UUID of the owner group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
    /// Set on the last group of a page when more groups are available.
    #[serde(rename = "_more_groups", default, skip_serializing_if = "Option::is_none")]
    pub more_groups: Option<bool>,
    /// Only present when the `MEMBERS` option was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<AccountInfo>>,
    /// Only present when the `INCLUDES` option was requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub includes: Option<Vec<GroupInfo>>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupOptionsInfo {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub visible_to_all: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountInfo {
    #[serde(rename = "_account_id")]
    pub account_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Payload for creating a group.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_to_all: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    /// Accounts to add as initial members, by any account identifier.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<String>,
}

impl GroupInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}
