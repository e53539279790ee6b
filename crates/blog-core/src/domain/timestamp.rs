use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A record timestamp as it was stored.
///
/// Clients send dates as JSON strings. A string that parses as RFC 3339 is
/// kept as a date; any other string is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Date(DateTime<Utc>),
    Text(String),
}

impl Timestamp {
    pub fn now() -> Self {
        Self::Date(Utc::now())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(at: DateTime<Utc>) -> Self {
        Self::Date(at)
    }
}

/// Dates sort after text, matching the document store's mixed-type order.
impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Text(_), Self::Date(_)) => Ordering::Less,
            (Self::Date(_), Self::Text(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
