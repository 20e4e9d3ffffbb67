use crate::schema::FeedSchema;
use csv::StringRecord;

/// Column order of the standard product feed layout, used when a feed
/// carries no header row.
pub const PRODUCT_FEED_COLUMNS: [&str; 8] = [
    "id",
    "name",
    "description",
    "picture",
    "currency",
    "categories",
    "units",
    "nanos",
];

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderSchema {
    columns: Vec<String>,
}

impl HeaderSchema {
    pub fn new(columns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }
}

impl Default for HeaderSchema {
    fn default() -> Self {
        Self::new(PRODUCT_FEED_COLUMNS)
    }
}

impl From<&StringRecord> for HeaderSchema {
    fn from(record: &StringRecord) -> Self {
        Self::new(record.iter())
    }
}

impl FeedSchema for HeaderSchema {
    fn has_column(&self, column: impl AsRef<str>) -> bool {
        self.column_position(column).is_some()
    }

    fn column_position(&self, column: impl AsRef<str>) -> Option<usize> {
        self.columns
            .iter()
            .position(|candidate| candidate == column.as_ref())
    }
}
