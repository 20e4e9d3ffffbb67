mod header;

pub use header::{HeaderSchema, PRODUCT_FEED_COLUMNS};

/// Column layout of a catalog feed, resolving column names to row positions.
pub trait FeedSchema {
    fn has_column(&self, column: impl AsRef<str>) -> bool;

    fn column_position(&self, column: impl AsRef<str>) -> Option<usize>;
}
