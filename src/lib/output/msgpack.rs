use crate::catalog::Product;
use crate::error::Error;
use crate::output::Output;

use rmp::encode::buffer::ByteBuf;
use rmp::encode::{write_array_len, write_sint, write_str, ValueWriteError};
use std::convert::Infallible;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Compact binary framing for catalog records: an eight element array of
/// id, name, description, picture, currency code, units, nanos and the
/// category list.
pub struct MessagePack;

impl Output for MessagePack {
    async fn write<T: AsyncWrite + Unpin>(
        &self,
        writer: &mut T,
        record: &Product,
    ) -> Result<(), Error> {
        let mut buffer = ByteBuf::with_capacity(256);

        write_array_len(&mut buffer, 8)?;
        write_str(&mut buffer, record.id.as_str())?;
        write_str(&mut buffer, record.name.as_str())?;
        write_str(&mut buffer, record.description.as_str())?;
        write_str(&mut buffer, record.picture.as_str())?;
        write_str(&mut buffer, record.price_usd.currency_code.as_str())?;
        write_sint(&mut buffer, record.price_usd.units)?;
        write_sint(&mut buffer, record.price_usd.nanos as i64)?;

        write_array_len(&mut buffer, record.categories.len() as u32)?;
        for category in &record.categories {
            write_str(&mut buffer, category.as_str())?;
        }

        writer.write_all(buffer.as_slice()).await?;
        Ok(())
    }
}

impl From<ValueWriteError<Infallible>> for Error {
    fn from(_value: ValueWriteError<Infallible>) -> Self {
        Error::OutputError
    }
}
