//! Transaction Ordering Module
//!
//! Orders transaction records by ledger version, newest first. A record
//! without a version is pending and ranks ahead of every committed one.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

// == Tx Version ==
/// Ledger position of a transaction.
///
/// Variant order matters: the derived `Ord` places `Pending` above every
/// committed version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TxVersion {
    /// Assigned ledger version
    Committed(u64),
    /// Not yet assigned a version
    Pending,
}

impl TxVersion {
    /// Parses an optional decimal version string.
    ///
    /// Strings that are not a decimal integer are treated as pending. This
    /// includes strings with trailing garbage: `"12abc"` ranks as pending,
    /// whereas a JavaScript `parseInt` would read it as 12.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => TxVersion::Pending,
            Some(s) => match s.trim().parse::<u64>() {
                Ok(v) => TxVersion::Committed(v),
                Err(e) => {
                    debug!("Unparseable transaction version {:?} ({}), ranking as pending", s, e);
                    TxVersion::Pending
                }
            },
        }
    }
}

// == Versioned Trait ==
/// Any record exposing an optional decimal `version` field.
pub trait Versioned {
    /// Raw version string, `None` for pending transactions.
    fn version(&self) -> Option<&str>;

    /// Parsed ledger position.
    fn tx_version(&self) -> TxVersion {
        TxVersion::parse(self.version())
    }
}

impl Versioned for Value {
    fn version(&self) -> Option<&str> {
        self.get("version").and_then(Value::as_str)
    }
}

impl<T: Versioned + ?Sized> Versioned for &T {
    fn version(&self) -> Option<&str> {
        (**self).version()
    }
}

// == Transaction ==
/// Transaction record with every field other than `version` kept opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Ledger version as a decimal string, absent while pending
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Remaining fields, passed through untouched
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Versioned for Transaction {
    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

// == Comparators ==
/// Two-valued comparator kept for parity with existing callers.
///
/// Returns `Greater` ("a after b") when `a` has the strictly smaller version
/// and `Less` otherwise. It never returns `Equal`, so tied versions compare
/// `Less` in both directions: this is not a total order and must not be passed
/// to `slice::sort_by`. Use [`sort_transactions`] to sort.
pub fn compare_transactions<A: Versioned, B: Versioned>(a: &A, b: &B) -> Ordering {
    if a.tx_version() < b.tx_version() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// Total order, descending by version. Ties compare `Equal`.
pub fn compare_versions_desc<A: Versioned, B: Versioned>(a: &A, b: &B) -> Ordering {
    b.tx_version().cmp(&a.tx_version())
}

/// Sorts newest first, pending transactions at the front.
///
/// The sort is stable: records with equal versions keep their input order.
pub fn sort_transactions<T: Versioned>(transactions: &mut [T]) {
    transactions.sort_by(|a, b| compare_versions_desc(a, b));
}
