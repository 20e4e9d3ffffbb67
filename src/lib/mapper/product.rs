use crate::catalog::Product;
use crate::error::Error;
use crate::feed::FeedRow;
use crate::mapper::FeedMapper;
use crate::schema::FeedSchema;

/// Maps one product feed row into a [`Product`] record, resolving fields by
/// column name so reordered feeds parse the same.
pub struct ProductFeedMapper;

impl FeedMapper<Product> for ProductFeedMapper {
    fn map_row(&self, row: &FeedRow, schema: &impl FeedSchema) -> Result<Option<Product>, Error> {
        if row.is_blank() {
            return Ok(None);
        }

        Ok(Some(Product::from_row(
            row.value("id", schema)?,
            row.value("name", schema)?,
            row.value("description", schema)?,
            row.value("picture", schema)?,
            row.value("currency", schema)?,
            row.value("categories", schema)?,
            row.parse::<i64>("units", schema)?,
            row.parse::<i32>("nanos", schema)?,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_feed_row_into_product_record() {
        mapper_test!(
            ProductFeedMapper,
            Some(Product::from_row(
                "1",
                "Botas",
                "De cuero",
                "bota.jpg",
                "USD",
                "ropa,calzado,invierno",
                50,
                0
            )),
            ["1", "Botas", "De cuero", "bota.jpg", "USD", "ropa,calzado,invierno", "50", "0"],
            ["id", "name", "description", "picture", "currency", "categories", "units", "nanos"]
        );
    }

    #[test]
    fn maps_columns_by_name_rather_than_position() {
        mapper_test!(
            ProductFeedMapper,
            Some(Product::from_row(
                "3", "PC", "Gamer", "pc.jpg", "EUR", "tech", 1200, 500
            )),
            ["500", "1200", "tech", "EUR", "pc.jpg", "Gamer", "PC", "3"],
            ["nanos", "units", "categories", "currency", "picture", "description", "name", "id"]
        );
    }

    #[test]
    fn skips_blank_rows_without_producing_record() {
        mapper_test!(
            ProductFeedMapper,
            None,
            ["", "", "", "", "", "", "", ""],
            ["id", "name", "description", "picture", "currency", "categories", "units", "nanos"]
        );
    }

    #[test]
    fn errors_when_units_column_holds_no_number() {
        let schema = test_schema![
            "id",
            "name",
            "description",
            "picture",
            "currency",
            "categories",
            "units",
            "nanos"
        ];
        let row = feed_row!("1", "Botas", "De cuero", "bota.jpg", "USD", "ropa", "fifty", "0");

        assert_eq!(
            ProductFeedMapper
                .map_row(&row, &schema)
                .unwrap_err()
                .to_string(),
            "Cannot parse \"fifty\" value as i64 in units column"
        );
    }

    #[test]
    fn errors_when_feed_misses_required_column() {
        let schema = test_schema!["id", "name"];
        let row = feed_row!("1", "Botas");

        assert_eq!(
            ProductFeedMapper
                .map_row(&row, &schema)
                .unwrap_err()
                .to_string(),
            "Cannot find value for description column"
        );
    }
}
