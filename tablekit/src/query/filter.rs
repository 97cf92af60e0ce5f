//! Global search and per-column filters.

use std::collections::BTreeMap;

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use serde::Deserialize;
use serde::Serialize;

use crate::Value;
use crate::column::{Column, FilterKind};

/// Per-column filter values keyed by column id.
pub type Filters = BTreeMap<String, Value>;

/// How the global search box matches cell text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlobalFilterMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy match via nucleo-matcher. Never reorders rows.
    Fuzzy,
}

/// Compiled global search query.
pub(crate) enum GlobalMatcher {
    Substring(String),
    Fuzzy {
        pattern: Pattern,
        matcher: Box<Matcher>,
        buf: Vec<char>,
    },
}

impl GlobalMatcher {
    /// Compile a query. Returns `None` for an empty query.
    pub fn new(query: &str, mode: GlobalFilterMode) -> Option<Self> {
        if query.is_empty() {
            return None;
        }
        Some(match mode {
            GlobalFilterMode::Substring => Self::Substring(query.to_lowercase()),
            GlobalFilterMode::Fuzzy => Self::Fuzzy {
                pattern: Pattern::new(
                    query,
                    CaseMatching::Ignore,
                    Normalization::Smart,
                    AtomKind::Fuzzy,
                ),
                matcher: Box::new(Matcher::new(Config::DEFAULT)),
                buf: Vec::new(),
            },
        })
    }

    /// Test one cell's text.
    pub fn matches(&mut self, text: &str) -> bool {
        match self {
            Self::Substring(needle) => text.to_lowercase().contains(needle.as_str()),
            Self::Fuzzy {
                pattern,
                matcher,
                buf,
            } => {
                let haystack = Utf32Str::new(text, buf);
                pattern.score(haystack, matcher).is_some()
            }
        }
    }

    /// Keep the row if any column's text matches.
    pub fn matches_row<R>(&mut self, columns: &[Column<R>], row: &R) -> bool {
        columns.iter().any(|column| self.matches(&column.text(row)))
    }
}

/// A per-column filter resolved against its column.
pub(crate) struct ColumnFilter<'a, R> {
    column: &'a Column<R>,
    needle: Needle,
}

enum Needle {
    /// Lower-cased text searched for in the cell text.
    Contains(String),
    /// Value the cell must equal, variant included.
    Equals(Value),
}

impl<'a, R> ColumnFilter<'a, R> {
    /// Resolve a filter entry. Empty values, unknown columns and
    /// non-filterable columns resolve to `None`.
    pub fn resolve(column: Option<&'a Column<R>>, value: &Value) -> Option<Self> {
        let column = column.filter(|c| c.filterable)?;
        if value.is_empty() {
            return None;
        }
        let needle = match column.filter_kind {
            FilterKind::Select => Needle::Equals(value.clone()),
            FilterKind::Text => {
                let text = value.to_text().to_lowercase();
                if text.is_empty() {
                    return None;
                }
                Needle::Contains(text)
            }
        };
        Some(Self { column, needle })
    }

    pub fn matches(&self, row: &R) -> bool {
        match &self.needle {
            Needle::Contains(text) => self.column.text(row).to_lowercase().contains(text),
            Needle::Equals(expected) => self.column.value(row) == *expected,
        }
    }
}

