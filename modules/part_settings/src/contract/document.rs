//! Book-like document carrier
//!
//! Only the parts of an item this crate reads or writes are modelled: its
//! display name, lore lines, author and pages.

use std::fmt;

/// What kind of item a document carrier is
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Empty book without any content slots; turned into a settings book on use
    BlankBook,
    /// Book with lore, author and pages
    Book,
    /// Any other item
    Other(String),
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::BlankBook => f.write_str("BOOK"),
            DocumentKind::Book => f.write_str("WRITTEN_BOOK"),
            DocumentKind::Other(name) => f.write_str(name),
        }
    }
}

/// A document carrier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: DocumentKind,
    pub display_name: Option<String>,
    /// Readable sections; the last line carries the hidden payload
    pub lore: Vec<String>,
    pub author: Option<String>,
    pub pages: Vec<String>,
}

impl Document {
    /// A blank book
    pub fn blank_book() -> Self {
        Self::empty(DocumentKind::BlankBook)
    }

    /// A fresh book ready to receive settings
    pub fn book() -> Self {
        Self::empty(DocumentKind::Book)
    }

    /// An item that cannot carry settings
    pub fn other(name: impl Into<String>) -> Self {
        Self::empty(DocumentKind::Other(name.into()))
    }

    fn empty(kind: DocumentKind) -> Self {
        Self {
            kind,
            display_name: None,
            lore: Vec::new(),
            author: None,
            pages: Vec::new(),
        }
    }

    pub fn is_book(&self) -> bool {
        self.kind == DocumentKind::Book
    }
}

/// What to do with a settings book that is used on a part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentAction {
    /// Load the book's settings into the part
    Apply,
    /// Overwrite the book with the part's settings
    Update,
}

/// Result of using a document on a part
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// A blank book was turned into a settings book
    Created(Document),
    /// The book's settings were applied; carries the number of options applied
    Applied(usize),
    /// The book was rewritten with the part's settings
    Updated(Document),
}
