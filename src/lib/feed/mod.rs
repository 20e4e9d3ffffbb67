mod reader;
mod row;

use crate::error::Error;
use crate::schema::FeedSchema;

pub use reader::FeedReader;
pub use row::FeedRow;

/// Receives every data row of a feed as it is read.
pub trait FeedObserver {
    async fn process_row(&self, row: FeedRow, schema: &impl FeedSchema) -> Result<(), Error>;
}
