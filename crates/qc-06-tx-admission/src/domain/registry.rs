//! Message classification registry.
//!
//! Every decodable message type belongs to exactly one `MsgCategory`.
//! The registry is assembled once with `MsgRegistryBuilder`, validated, and
//! then shared immutably (usually behind an `Arc`) by every decorator that
//! needs to know what a message is.
//!
//! ## Construction Checks
//!
//! | Check | Error |
//! |-------|-------|
//! | a type URL listed twice (same or different category) | `RegistryError::Duplicate` |
//! | a decodable type missing from every category | `RegistryError::Untriaged` |
//! | a categorised type the codec cannot decode | `RegistryError::Undecodable` |
//!
//! The last two only run through `build_for_codec`, which takes the codec's
//! full list of decodable type URLs.

use super::errors::RegistryError;
use super::msg_types::{
    APP_INJECTED_MSGS, INTERNAL_MSGS, NESTED_MSGS, NORMAL_MSGS, UNSUPPORTED_MSGS,
};
use shared_types::Msg;
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::info;

/// Metric label used for every unregistered message type.
pub const UNKNOWN_MSG_TYPE_LABEL: &str = "unknown";

/// Admission category of a message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MsgCategory {
    /// Placed in a block by the proposer; carries no signer.
    AppInjected,
    /// Must come from a privileged authority, never from a user tx.
    Internal,
    /// Container of inner messages executed with delegated authority.
    Nested,
    /// Decodable but always rejected.
    Unsupported,
    /// Ordinary user message.
    Normal,
}

impl MsgCategory {
    pub const ALL: [MsgCategory; 5] = [
        MsgCategory::AppInjected,
        MsgCategory::Internal,
        MsgCategory::Nested,
        MsgCategory::Unsupported,
        MsgCategory::Normal,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MsgCategory::AppInjected => "app_injected",
            MsgCategory::Internal => "internal",
            MsgCategory::Nested => "nested",
            MsgCategory::Unsupported => "unsupported",
            MsgCategory::Normal => "normal",
        }
    }
}

impl fmt::Display for MsgCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Collects category assignments before validation.
#[derive(Debug, Default, Clone)]
pub struct MsgRegistryBuilder {
    entries: Vec<(String, MsgCategory)>,
}

impl MsgRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every type URL in `types` to `category`.
    pub fn with<I, S>(mut self, category: MsgCategory, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .extend(types.into_iter().map(|t| (t.into(), category)));
        self
    }

    /// Validates pairwise disjointness and freezes the registry.
    pub fn build(self) -> Result<MsgRegistry, RegistryError> {
        let mut categories: HashMap<String, MsgCategory> =
            HashMap::with_capacity(self.entries.len());

        for (type_url, category) in self.entries {
            if let Some(first) = categories.get(&type_url) {
                return Err(RegistryError::Duplicate {
                    type_url,
                    first: *first,
                    second: category,
                });
            }
            categories.insert(type_url, category);
        }

        let registry = MsgRegistry { categories };
        info!(
            "[Admission] Msg registry built: {} types (app_injected={}, internal={}, nested={}, unsupported={}, normal={})",
            registry.len(),
            registry.count(MsgCategory::AppInjected),
            registry.count(MsgCategory::Internal),
            registry.count(MsgCategory::Nested),
            registry.count(MsgCategory::Unsupported),
            registry.count(MsgCategory::Normal),
        );
        Ok(registry)
    }

    /// Like `build`, and additionally checks that the categorised set is
    /// exactly the codec's set of decodable type URLs.
    pub fn build_for_codec<I, S>(self, decodable: I) -> Result<MsgRegistry, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let registry = self.build()?;
        let decodable: HashSet<String> = decodable
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut untriaged: Vec<&String> = decodable
            .iter()
            .filter(|t| !registry.contains(t))
            .collect();
        untriaged.sort();
        if let Some(type_url) = untriaged.first() {
            return Err(RegistryError::Untriaged((*type_url).clone()));
        }

        let mut undecodable: Vec<&str> = registry
            .categories
            .keys()
            .map(String::as_str)
            .filter(|t| !decodable.contains(*t))
            .collect();
        undecodable.sort_unstable();
        if let Some(type_url) = undecodable.first() {
            return Err(RegistryError::Undecodable((*type_url).to_string()));
        }

        Ok(registry)
    }
}

/// Immutable mapping from type URL to category.
#[derive(Debug, Clone)]
pub struct MsgRegistry {
    categories: HashMap<String, MsgCategory>,
}

impl MsgRegistry {
    /// The chain's full message catalogue.
    pub fn standard() -> Result<Self, RegistryError> {
        Self::standard_builder().build()
    }

    /// Builder pre-loaded with the standard catalogue, for hosts that add
    /// their own message types.
    pub fn standard_builder() -> MsgRegistryBuilder {
        MsgRegistryBuilder::new()
            .with(MsgCategory::AppInjected, APP_INJECTED_MSGS.iter().copied())
            .with(MsgCategory::Internal, INTERNAL_MSGS.iter().copied())
            .with(MsgCategory::Nested, NESTED_MSGS.iter().copied())
            .with(MsgCategory::Unsupported, UNSUPPORTED_MSGS.iter().copied())
            .with(MsgCategory::Normal, NORMAL_MSGS.iter().copied())
    }

    /// Category of `type_url`, or `None` if it is not a registered type.
    pub fn classify(&self, type_url: &str) -> Option<MsgCategory> {
        self.categories.get(type_url).copied()
    }

    pub fn classify_msg(&self, msg: &Msg) -> Option<MsgCategory> {
        self.classify(&msg.type_url)
    }

    pub fn contains(&self, type_url: &str) -> bool {
        self.categories.contains_key(type_url)
    }

    /// Metric label for `type_url`. Unregistered URLs share one label so
    /// senders cannot mint new series.
    pub fn metric_label<'a>(&self, type_url: &'a str) -> &'a str {
        if self.contains(type_url) {
            type_url
        } else {
            UNKNOWN_MSG_TYPE_LABEL
        }
    }

    /// Label of the first message of `msgs`, the one metrics are keyed by.
    pub fn first_msg_label<'a>(&self, msgs: &'a [Msg]) -> &'a str {
        match msgs.first() {
            Some(msg) => self.metric_label(&msg.type_url),
            None => UNKNOWN_MSG_TYPE_LABEL,
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of types in `category`.
    pub fn count(&self, category: MsgCategory) -> usize {
        self.categories.values().filter(|c| **c == category).count()
    }

    /// Sorted type URLs of one category.
    pub fn types_in(&self, category: MsgCategory) -> Vec<&str> {
        let mut out: Vec<&str> = self
            .categories
            .iter()
            .filter(|(_, c)| **c == category)
            .map(|(t, _)| t.as_str())
            .collect();
        out.sort_unstable();
        out
    }

    /// True iff `msgs` is exactly one app-injected message.
    ///
    /// The bypass wrapper and the gas exemption both key off this; it must
    /// agree with how the message-type decorator classifies.
    pub fn is_single_app_injected(&self, msgs: &[Msg]) -> bool {
        match msgs {
            [only] => self.classify_msg(only) == Some(MsgCategory::AppInjected),
            _ => false,
        }
    }
}
