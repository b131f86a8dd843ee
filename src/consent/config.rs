//! Configuration store: which cookie groups exist and which cookies they cover.
//!
//! Loaded once from operator configuration and never mutated afterwards. The
//! JSON shape maps a group name to host keys and their cookie names:
//!
//! ```json
//! {
//!     "Necessary": { "local": ["PHPSESSID"] },
//!     "Analytics": { "local": ["_ga", "_gid"], "google_com": ["NID"] },
//!     "Marketing": { "facebook_com": ["_fbp"] }
//! }
//! ```
//!
//! Declaration order is preserved, so it is also the order consent is written
//! in by [`ConsentLedger::grant_all`](crate::consent::ledger::ConsentLedger::grant_all).

use crate::base::context::IoResultExt;
use crate::base::error::ConsentError;
use crate::consent::group::{CookieGroup, CookieSpec, HostKey};
use crate::cookies::psl;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::fs;
use std::marker::PhantomData;
use std::path::Path;

/// Immutable set of configured cookie groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsentConfig {
    groups: Vec<CookieGroup>,
}

impl ConsentConfig {
    /// Validate and build a configuration.
    ///
    /// Fails when the required default group is absent or a name repeats.
    pub fn new(groups: Vec<CookieGroup>) -> Result<Self, ConsentError> {
        for (i, group) in groups.iter().enumerate() {
            if groups[..i].iter().any(|g| g.name == group.name) {
                return Err(ConsentError::duplicate_group(&group.name));
            }
        }

        if !groups.iter().any(CookieGroup::is_required) {
            return Err(ConsentError::MissingRequiredGroup);
        }

        for group in &groups {
            for spec in &group.cookies {
                if let HostKey::Literal(_) = spec.host_key {
                    let domain = spec.host_key.resolve("");
                    if psl::is_public_suffix(&domain) {
                        tracing::warn!(
                            group = %group.name,
                            cookie = %spec.cookie_name,
                            domain = %domain,
                            "host key resolves to a public suffix, expiry will be ignored by browsers"
                        );
                    }
                }
            }
        }

        tracing::debug!(groups = groups.len(), "cookie consent config loaded");
        Ok(Self { groups })
    }

    /// Parse the JSON configuration format.
    pub fn from_json_str(json: &str) -> Result<Self, ConsentError> {
        let raw: RawConfig = serde_json::from_str(json)?;
        Self::new(raw.into_groups())
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConsentError> {
        let json = fs::read_to_string(path).config_context(path)?;
        Self::from_json_str(&json)
    }

    pub fn group(&self, name: &str) -> Option<&CookieGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.group(name).is_some()
    }

    /// Group names in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.groups.iter().map(|g| g.name.as_str())
    }

    pub fn groups(&self) -> &[CookieGroup] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl<'de> Deserialize<'de> for ConsentConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawConfig::deserialize(deserializer)?;
        ConsentConfig::new(raw.into_groups()).map_err(de::Error::custom)
    }
}

/// `{ group: { host_key: [cookie, ...] } }`, groups may map to `null`.
type RawConfig = OrderedMap<Option<OrderedMap<Vec<String>>>>;

impl RawConfig {
    fn into_groups(self) -> Vec<CookieGroup> {
        self.0
            .into_iter()
            .map(|(name, hosts)| {
                let cookies = hosts
                    .map(|hosts| hosts.0)
                    .unwrap_or_default()
                    .into_iter()
                    .flat_map(|(host, names)| {
                        let host_key = HostKey::parse(&host);
                        names
                            .into_iter()
                            .map(move |cookie| CookieSpec::new(host_key.clone(), cookie))
                    })
                    .collect();
                CookieGroup::new(name, cookies)
            })
            .collect()
    }
}

/// JSON object read as a list of entries, keeping key order.
struct OrderedMap<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedMapVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, value)) = access.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}
