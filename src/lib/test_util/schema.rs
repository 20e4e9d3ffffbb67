use crate::schema::FeedSchema;
use phf::{phf_map, Map};

static TEST_FEED_SCHEMA: Map<&'static str, TestFeedSchema> = phf_map! {
    "product" => test_schema![
        "id", "name", "description", "picture", "currency", "categories", "units", "nanos"
    ],
    "legacy_product" => test_schema![
        "sku", "title", "details", "image", "currency", "tags", "price_units", "price_nanos"
    ],
};

#[derive(Clone, Copy, Debug)]
pub struct TestFeedSchema {
    columns: &'static [&'static str],
}

impl TestFeedSchema {
    pub const fn new(columns: &'static [&'static str]) -> Self {
        Self { columns }
    }
}

impl FeedSchema for TestFeedSchema {
    fn has_column(&self, column: impl AsRef<str>) -> bool {
        self.column_position(column).is_some()
    }

    fn column_position(&self, column: impl AsRef<str>) -> Option<usize> {
        self.columns
            .iter()
            .position(|candidate| *candidate == column.as_ref())
    }
}

pub fn feed_schema(name: &'static str) -> &TestFeedSchema {
    TEST_FEED_SCHEMA.get(name).unwrap()
}
