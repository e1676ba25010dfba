//! Link descriptors handed to the template layer.

use std::fmt;

use serde::{Serialize, Serializer};

/// Text shown in place of skipped page numbers.
pub const GAP_LABEL: &str = "…";

/// Label of a single pagination link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLabel {
    Number(i64),
    /// Truncation marker standing in for one or more hidden pages.
    Gap,
}

impl fmt::Display for PageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Gap => f.write_str(GAP_LABEL),
        }
    }
}

// Numbers stay numbers on the wire; the marker goes out as a string.
impl Serialize for PageLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serializer.serialize_i64(*n),
            Self::Gap => serializer.serialize_str(GAP_LABEL),
        }
    }
}

/// One rendered link: target url and label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub url: String,
    pub label: PageLabel,
}

/// Everything a template needs to draw the page navigation.
///
/// The default value is the empty structure returned for lists that fit on one page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DisplayData {
    pub prev_link: Option<String>,
    pub next_link: Option<String>,
    pub active: i64,
    pub pages: Vec<PageLink>,
}

impl DisplayData {
    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
