mod observer;
mod product;

use crate::error::Error;
use crate::feed::FeedRow;
use crate::schema::FeedSchema;

pub use observer::MapperObserver;
pub use product::ProductFeedMapper;

pub trait FeedMapper<T> {
    fn map_row(&self, row: &FeedRow, schema: &impl FeedSchema) -> Result<Option<T>, Error>;
}
