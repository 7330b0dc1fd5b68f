//! Client-side list filtering.
//!
//! Filters are pure predicates over already-fetched items. A cleared filter
//! keeps every item, and applying a filter twice gives the same result as
//! applying it once.

use std::fmt;
use std::str::FromStr;

/// A predicate over list items.
pub trait ListFilter<T> {
    fn matches(&self, item: &T) -> bool;

    /// True when no criterion is set.
    fn is_cleared(&self) -> bool;

    fn apply(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        if self.is_cleared() {
            return items.to_vec();
        }
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}

/// Lowercases, trims and collapses inner whitespace.
#[must_use]
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalizes a department or study program name for comparison.
///
/// Leading "program studi" / "prodi" labels are dropped, so
/// `"Program Studi  Informatika"` and `"informatika"` compare equal.
#[must_use]
pub fn normalize_department(raw: &str) -> String {
    let normalized = normalize_text(raw);
    for prefix in ["program studi ", "prodi "] {
        if let Some(rest) = normalized.strip_prefix(prefix) {
            return rest.to_string();
        }
    }
    normalized
}

/// Compares `got` with `want` only when a value is wanted.
#[inline]
#[must_use]
pub fn eq_if_set<V: PartialEq>(want: Option<&V>, got: &V) -> bool {
    want.is_none_or(|w| w == got)
}

/// Case-insensitive substring search over several fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery(Option<String>);

impl TextQuery {
    pub fn new(raw: Option<&str>) -> Self {
        Self(raw.map(normalize_text).filter(|q| !q.is_empty()))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// True when the query is empty or any field contains it.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let Some(query) = &self.0 else {
            return true;
        };
        fields
            .into_iter()
            .flatten()
            .any(|field| normalize_text(field).contains(query.as_str()))
    }
}

/// Semester selector accepted by list filters.
///
/// Parses `""`, `"all"`, `"semua"` as [`SemesterFilter::Any`]; a number
/// (optionally prefixed by `semester`/`smt`) as an exact semester; and the
/// academic term names `ganjil`/`genap` as odd/even semesters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SemesterFilter {
    #[default]
    Any,
    Exact(u8),
    Ganjil,
    Genap,
}

impl SemesterFilter {
    #[must_use]
    pub const fn is_any(self) -> bool {
        matches!(self, Self::Any)
    }

    #[must_use]
    pub const fn matches(self, semester: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Exact(wanted) => wanted == semester,
            Self::Ganjil => semester % 2 == 1,
            Self::Genap => semester != 0 && semester % 2 == 0,
        }
    }

    /// Matches an optional semester; a missing semester only passes `Any`.
    #[must_use]
    pub fn matches_opt(self, semester: Option<u8>) -> bool {
        self.is_any() || semester.is_some_and(|s| self.matches(s))
    }
}

impl FromStr for SemesterFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize_text(s);
        match normalized.as_str() {
            "" | "all" | "semua" => return Ok(Self::Any),
            "ganjil" | "odd" => return Ok(Self::Ganjil),
            "genap" | "even" => return Ok(Self::Genap),
            _ => {}
        }

        let digits = normalized
            .trim_start_matches("semester")
            .trim_start_matches("smt")
            .trim();
        match digits.parse::<u8>() {
            Ok(n) if (1..=14).contains(&n) => Ok(Self::Exact(n)),
            _ => Err(format!("invalid semester: {s}")),
        }
    }
}

impl fmt::Display for SemesterFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => write!(f, "semua"),
            Self::Exact(n) => write!(f, "Semester {n}"),
            Self::Ganjil => write!(f, "ganjil"),
            Self::Genap => write!(f, "genap"),
        }
    }
}

/// Department selector: by numeric id or by (normalized) name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DepartmentFilter {
    #[default]
    Any,
    Id(u64),
    Name(String),
}

impl DepartmentFilter {
    #[must_use]
    pub const fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    #[must_use]
    pub fn matches(&self, id: Option<u64>, name: Option<&str>) -> bool {
        match self {
            Self::Any => true,
            Self::Id(wanted) => id == Some(*wanted),
            Self::Name(wanted) => name.is_some_and(|n| normalize_department(n) == *wanted),
        }
    }
}

impl FromStr for DepartmentFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("all")
            || trimmed.eq_ignore_ascii_case("semua")
        {
            return Ok(Self::Any);
        }
        Ok(match trimmed.parse::<u64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(normalize_department(trimmed)),
        })
    }
}
