use crate::catalog::Product;
use crate::error::Error;
use crate::output::Output;

use serde_json::to_vec;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// One JSON object per catalog record, newline delimited.
pub struct JsonOutput;

impl Output for JsonOutput {
    async fn write<T: AsyncWrite + Unpin>(
        &self,
        writer: &mut T,
        record: &Product,
    ) -> Result<(), Error> {
        writer
            .write_all(&to_vec(record).map_err(Error::Json)?)
            .await
            .map_err(Error::Io)?;

        writer.write_all(b"\n").await.map_err(Error::Io)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{from_slice, json, Value};
    use std::io::Cursor;

    #[derive(Debug, PartialEq)]
    struct ExpectedValue(Value);

    impl From<Vec<u8>> for ExpectedValue {
        fn from(value: Vec<u8>) -> Self {
            match value.iter().position(|v| *v == b'\n') {
                Some(position) => Self(from_slice(&value[0..position]).unwrap()),
                None => unimplemented!(),
            }
        }
    }

    #[tokio::test]
    async fn outputs_record_with_split_categories() {
        output_test!(
            JsonOutput,
            Product::from_row(
                "1",
                "Botas",
                "De cuero",
                "bota.jpg",
                "USD",
                "ropa,calzado,invierno",
                50,
                0
            ),
            ExpectedValue(json!({
                "id": "1",
                "name": "Botas",
                "description": "De cuero",
                "picture": "bota.jpg",
                "price_usd": {"currency_code": "USD", "units": 50, "nanos": 0},
                "categories": ["ropa", "calzado", "invierno"]
            }))
        );
    }

    #[tokio::test]
    async fn outputs_record_without_categories_as_empty_list() {
        output_test!(
            JsonOutput,
            Product::from_row("2", "Taza", "Cerámica", "taza.jpg", "USD", "", 10, 0),
            ExpectedValue(json!({
                "id": "2",
                "name": "Taza",
                "description": "Cerámica",
                "picture": "taza.jpg",
                "price_usd": {"currency_code": "USD", "units": 10, "nanos": 0},
                "categories": []
            }))
        );
    }

    #[tokio::test]
    async fn outputs_price_fields_verbatim() {
        output_test!(
            JsonOutput,
            Product::from_row("3", "PC", "Gamer", "pc.jpg", "EUR", "tech", 1200, 500),
            ExpectedValue(json!({
                "id": "3",
                "name": "PC",
                "description": "Gamer",
                "picture": "pc.jpg",
                "price_usd": {"currency_code": "EUR", "units": 1200, "nanos": 500},
                "categories": ["tech"]
            }))
        );
    }
}
