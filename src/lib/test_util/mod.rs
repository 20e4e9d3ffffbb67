#[macro_use]
mod macros;
mod observer;
mod record_sender;
mod schema;

pub use observer::ObserverSpy;
pub use record_sender::TestRecordSender;
pub use schema::{feed_schema, TestFeedSchema};
