use serde::{Deserialize, Serialize};
use std::{convert::Infallible, fmt, str};

/// Identifier of a network link, e.g. `L-NYC-01`.
///
/// The identifier is an opaque key: any string is a valid [`LinkId`].
/// Whether the link is actually known is answered by the
/// [`LinkCatalog`](crate::link::LinkCatalog).
///
/// ```
/// # use netoptic_core::link::LinkId;
/// let id: LinkId = "L-NYC-01".parse().unwrap();
/// assert_eq!(id, LinkId::from("L-NYC-01"));
/// assert_eq!(id.to_string(), "L-NYC-01");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LinkId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for LinkId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for LinkId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl str::FromStr for LinkId {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
