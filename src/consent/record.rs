//! Data contract for the admin layer that presents cookie groups.
//!
//! The ledger only ever needs a group's name. Titles and descriptions are
//! presentation data owned by whatever stores the records; this module tells
//! that collaborator which records are missing and what it may do with them.

use crate::consent::config::ConsentConfig;
use crate::consent::group::CookieGroup;
use serde::{Deserialize, Serialize};

/// A presentable cookie inside a group record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieDescription {
    pub config_name: String,
    pub title: String,
}

/// A cookie group as the admin layer stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieGroupRecord {
    /// Key into the configuration, never edited.
    pub config_name: String,
    pub title: String,
    /// Rich-text description shown to the visitor.
    pub content: String,
    pub cookies: Vec<CookieDescription>,
}

impl CookieGroupRecord {
    /// Record with defaults derived from a configured group.
    pub fn from_group(group: &CookieGroup) -> Self {
        Self {
            config_name: group.name.clone(),
            title: group.name.clone(),
            content: String::new(),
            cookies: group
                .cookies
                .iter()
                .map(|spec| CookieDescription {
                    config_name: spec.cookie_name.clone(),
                    title: spec.cookie_name.clone(),
                })
                .collect(),
        }
    }

    pub fn is_required(&self) -> bool {
        self.config_name == CookieGroup::REQUIRED_DEFAULT
    }

    /// Groups come from configuration only.
    pub fn can_create(&self) -> bool {
        false
    }

    pub fn can_delete(&self) -> bool {
        false
    }
}

/// Records the admin layer still has to materialize, in configuration order.
pub fn pending_records<'a, I>(config: &ConsentConfig, existing: I) -> Vec<CookieGroupRecord>
where
    I: IntoIterator<Item = &'a str>,
{
    let existing: Vec<&str> = existing.into_iter().collect();
    let pending: Vec<CookieGroupRecord> = config
        .groups()
        .iter()
        .filter(|g| !existing.contains(&g.name.as_str()))
        .map(CookieGroupRecord::from_group)
        .collect();

    for record in &pending {
        tracing::debug!(group = %record.config_name, "cookie group record pending");
    }
    pending
}
