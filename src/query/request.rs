use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced when parsing request parts from user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown sort field '{0}' (expected forks, stars or updated)")]
    SortField(String),
    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    SortDirection(String),
    #[error("unsupported page size '{0}' (expected 10, 25 or 50)")]
    PageSize(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Forks,
    Stars,
    Updated,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Forks, SortField::Stars, SortField::Updated];

    /// Value of the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Forks => "forks",
            SortField::Stars => "stars",
            SortField::Updated => "updated",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "forks" => Ok(SortField::Forks),
            "stars" => Ok(SortField::Stars),
            "updated" => Ok(SortField::Updated),
            _ => Err(ParseError::SortField(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Value of the `order` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            _ => Err(ParseError::SortDirection(s.to_string())),
        }
    }
}

/// An explicit sort. Absence of a `SortOrder` means the server's relevance ranking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "usize", try_from = "usize")]
pub enum PageSize {
    #[default]
    Ten,
    TwentyFive,
    Fifty,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::TwentyFive, PageSize::Fifty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
            PageSize::Fifty => 50,
        }
    }

    /// Cycles 10 -> 25 -> 50 -> 10.
    pub fn next(self) -> Self {
        match self {
            PageSize::Ten => PageSize::TwentyFive,
            PageSize::TwentyFive => PageSize::Fifty,
            PageSize::Fifty => PageSize::Ten,
        }
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

impl TryFrom<usize> for PageSize {
    type Error = ParseError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or_else(|| ParseError::PageSize(value.to_string()))
    }
}

impl FromStr for PageSize {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: usize = s
            .trim()
            .parse()
            .map_err(|_| ParseError::PageSize(s.to_string()))?;
        PageSize::try_from(value)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

/// The canonical search request: everything that determines one gateway call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub sort: Option<SortOrder>,
    /// Zero-based; the gateway translates to the API's one-based numbering.
    pub page_index: usize,
    pub page_size: PageSize,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn sort_field(&self) -> Option<SortField> {
        self.sort.map(|s| s.field)
    }

    pub fn sort_direction(&self) -> Option<SortDirection> {
        self.sort.map(|s| s.direction)
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}
