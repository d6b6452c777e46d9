//! Truthy and falsy token tables.
//!
//! Tables are built from comma-separated lists: each token is trimmed and
//! empty entries are skipped. Matching is exact and case-sensitive, so every
//! accepted casing is listed explicitly.

use std::collections::BTreeSet;

/// Tokens read as `true`, including `on`.
///
/// Any positive number (`2`, `0.01`, `1e-3`) is also `true` under
/// [`BoolMode::Classifying`](crate::BoolMode::Classifying).
pub const TRUE_VALUES: &str = "true,True,TRUE,T,t,1,yes,Yes,YES,on,On,ON";

/// Tokens read as `false`, including `off`.
///
/// Zero and any negative number (`0.00`, `-3`) are also `false` under
/// [`BoolMode::Classifying`](crate::BoolMode::Classifying).
pub const FALSE_VALUES: &str = "false,False,FALSE,F,f,0,no,No,NO,off,Off,OFF";

/// [`TRUE_VALUES`] without `on`.
pub const CANONICAL_TRUE_VALUES: &str = "true,True,TRUE,T,t,1,yes,Yes,YES";

/// [`FALSE_VALUES`] without `off`.
pub const CANONICAL_FALSE_VALUES: &str = "false,False,FALSE,F,f,0,no,No,NO";

/// A set of exact-match tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenSet(BTreeSet<String>);

impl TokenSet {
    /// Parse a comma-separated list.
    pub fn parse(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn contains(&self, token: &str) -> bool {
        self.0.contains(token)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// The truthy and falsy sets consulted first during classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTables {
    truthy: TokenSet,
    falsy: TokenSet,
}

impl Default for TokenTables {
    fn default() -> Self {
        Self::extended()
    }
}

impl TokenTables {
    /// Build from two comma-separated lists.
    ///
    /// The sets should be disjoint. A token in both is read as `true`, since
    /// the truthy set is checked first; overlaps are logged.
    pub fn from_lists(truthy: &str, falsy: &str) -> Self {
        let tables = Self {
            truthy: TokenSet::parse(truthy),
            falsy: TokenSet::parse(falsy),
        };
        let overlap = tables.overlap();
        if !overlap.is_empty() {
            tracing::warn!(
                tokens = ?overlap,
                "tokens appear in both truthy and falsy tables; truthy wins"
            );
        }
        tables
    }

    /// `on`/`off` included. This is the default.
    pub fn extended() -> Self {
        Self::from_lists(TRUE_VALUES, FALSE_VALUES)
    }

    /// Without `on`/`off`.
    pub fn canonical() -> Self {
        Self::from_lists(CANONICAL_TRUE_VALUES, CANONICAL_FALSE_VALUES)
    }

    pub fn truthy(&self) -> &TokenSet {
        &self.truthy
    }

    pub fn falsy(&self) -> &TokenSet {
        &self.falsy
    }

    /// Exact-match lookup: `Some(true)`, `Some(false)`, or `None` if in neither set.
    pub fn lookup(&self, token: &str) -> Option<bool> {
        if self.truthy.contains(token) {
            Some(true)
        } else if self.falsy.contains(token) {
            Some(false)
        } else {
            None
        }
    }

    /// Tokens present in both sets.
    pub fn overlap(&self) -> Vec<&str> {
        self.truthy
            .iter()
            .filter(|t| self.falsy.contains(t))
            .collect()
    }
}
