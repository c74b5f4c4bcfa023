use crate::{defaults, link::LinkId};
use serde::{Deserialize, Serialize};

/// One known link and its base load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkEntry {
    pub id: LinkId,
    /// Load, in Gbps, around which the diurnal traffic curve oscillates.
    pub base_load: f64,
}

/// Outcome of looking a [`LinkId`] up in a [`LinkCatalog`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinkClass {
    /// The link has a dedicated entry.
    Known { base_load: f64 },
    /// The link is not in the catalog; the default bucket applies.
    Unknown { base_load: f64 },
}

impl LinkClass {
    /// Base load, in Gbps, regardless of whether the link is known.
    #[inline]
    pub fn base_load(self) -> f64 {
        match self {
            Self::Known { base_load } | Self::Unknown { base_load } => base_load,
        }
    }

    #[inline]
    pub fn is_known(self) -> bool {
        matches!(self, Self::Known { .. })
    }
}

/// The closed set of links of a deployment.
///
/// Lookups never fail: an identifier without an entry falls into the
/// default bucket, and the returned [`LinkClass`] says so.
///
/// ```
/// # use netoptic_core::link::{LinkCatalog, LinkClass, LinkId};
/// let catalog = LinkCatalog::default();
///
/// assert_eq!(
///     catalog.lookup(&LinkId::from("L-NYC-01")),
///     LinkClass::Known { base_load: 40.0 },
/// );
/// assert_eq!(
///     catalog.lookup(&LinkId::from("L-LON-99")),
///     LinkClass::Unknown { base_load: 25.0 },
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkCatalog {
    pub entries: Vec<LinkEntry>,
    pub default_base_load: f64,
}

impl Default for LinkCatalog {
    fn default() -> Self {
        let entry = |id: &str, base_load: f64| LinkEntry {
            id: LinkId::from(id),
            base_load,
        };
        Self {
            entries: vec![
                entry("L-NYC-01", defaults::NYC_BASE_LOAD_GBPS),
                entry("L-CHI-02", defaults::CHI_BASE_LOAD_GBPS),
                entry("L-SFO-03", defaults::DEFAULT_BASE_LOAD_GBPS),
            ],
            default_base_load: defaults::DEFAULT_BASE_LOAD_GBPS,
        }
    }
}

impl LinkCatalog {
    pub fn lookup(&self, id: &LinkId) -> LinkClass {
        match self.entries.iter().find(|entry| &entry.id == id) {
            Some(entry) => LinkClass::Known {
                base_load: entry.base_load,
            },
            None => LinkClass::Unknown {
                base_load: self.default_base_load,
            },
        }
    }

    pub fn contains(&self, id: &LinkId) -> bool {
        self.lookup(id).is_known()
    }

    /// Known link identifiers, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &LinkId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Error returned when a link is required to be in the catalog but is not.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown link identifier `{0}'")]
pub struct UnknownLinkError(pub LinkId);
