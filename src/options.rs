use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Extra detail the server can include for each listed group.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListGroupsOption {
    /// Include the direct members of each group.
    Members,
    /// Include the directly included groups of each group.
    Includes,
}

impl ListGroupsOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListGroupsOption::Members => "MEMBERS",
            ListGroupsOption::Includes => "INCLUDES",
        }
    }
}

impl Display for ListGroupsOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListGroupsOption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "MEMBERS" => Ok(ListGroupsOption::Members),
            "INCLUDES" => Ok(ListGroupsOption::Includes),
            _ => Err(format!("unknown list option '{s}'")),
        }
    }
}

/// Set of display options. Iterates in declaration order so the same set
/// always produces the same request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptionSet(BTreeSet<ListGroupsOption>);

impl ListOptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, option: ListGroupsOption) -> bool {
        self.0.insert(option)
    }

    pub fn contains(&self, option: ListGroupsOption) -> bool {
        self.0.contains(&option)
    }

    pub fn iter(&self) -> impl Iterator<Item = ListGroupsOption> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<ListGroupsOption> for ListOptionSet {
    fn extend<I: IntoIterator<Item = ListGroupsOption>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}

impl FromIterator<ListGroupsOption> for ListOptionSet {
    fn from_iter<I: IntoIterator<Item = ListGroupsOption>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[ListGroupsOption; N]> for ListOptionSet {
    fn from(options: [ListGroupsOption; N]) -> Self {
        options.into_iter().collect()
    }
}
