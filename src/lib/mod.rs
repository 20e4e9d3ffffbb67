#[cfg(any(feature = "test_util", test))]
#[macro_use]
pub mod test_util;

pub mod app;
pub mod catalog;
pub mod error;
pub mod feed;
pub mod mapper;
pub mod output;
pub mod schema;

pub use catalog::{Money, Product};
pub use schema::FeedSchema;

/// Stack capacity for row fields before spilling to the heap.
pub const ROW_BUFFER_SIZE: usize = 16;
