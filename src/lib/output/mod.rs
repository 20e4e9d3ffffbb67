mod json;
mod msgpack;

use crate::catalog::Product;
use crate::error::Error;

pub use json::*;
pub use msgpack::*;

use tokio::io::AsyncWrite;

pub trait Output {
    async fn write<T: AsyncWrite + Unpin>(
        &self,
        writer: &mut T,
        record: &Product,
    ) -> Result<(), Error>;
}
