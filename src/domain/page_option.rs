//! Page-count options offered when creating a book.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::types::{PageCount, PageOptionLabel};

/// A selectable page count, optionally carrying a descriptive label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageOption {
    Bare(PageCount),
    Labeled(PageCount, PageOptionLabel),
}

impl PageOption {
    /// Page count submitted when this option is selected.
    pub fn page_count(&self) -> PageCount {
        match self {
            PageOption::Bare(count) | PageOption::Labeled(count, _) => *count,
        }
    }

    pub fn label(&self) -> Option<&PageOptionLabel> {
        match self {
            PageOption::Bare(_) => None,
            PageOption::Labeled(_, label) => Some(label),
        }
    }
}

impl Display for PageOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PageOption::Bare(count) => write!(f, "{count} pages"),
            PageOption::Labeled(count, label) => write!(f, "{count} pages — {label}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_bare_and_labeled_options() {
        let bare = PageOption::Bare(PageCount::new(10).unwrap());
        let labeled = PageOption::Labeled(
            PageCount::new(20).unwrap(),
            PageOptionLabel::new("Deluxe").unwrap(),
        );

        assert_eq!(bare.to_string(), "10 pages");
        assert_eq!(labeled.to_string(), "20 pages — Deluxe");
        assert_eq!(labeled.page_count().get(), 20);
        assert_eq!(labeled.label().map(PageOptionLabel::as_str), Some("Deluxe"));
        assert!(bare.label().is_none());
    }
}
