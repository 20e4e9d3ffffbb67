mod fixture;

use catalog_feed_export::catalog::{Money, Product};
use catalog_feed_export::error::Error;
use catalog_feed_export::feed::{FeedReader, FeedRow};
use catalog_feed_export::mapper::{FeedMapper, MapperObserver, ProductFeedMapper};
use catalog_feed_export::schema::{FeedSchema, HeaderSchema};
use catalog_feed_export::test_util::TestRecordSender;
use fixture::fixture_path;
use std::fs::File;

#[tokio::test]
async fn exports_product_records_from_catalog_feed() -> Result<(), Error> {
    let records = export_fixture().await?;

    assert_eq!(records.len(), 6);
    assert_eq!(
        records[0],
        Product::from_row(
            "OLJCESPC7Z",
            "Sunglasses",
            "Add a modern touch to your wardrobe with these sleek aviator sunglasses.",
            "/static/img/products/sunglasses.jpg",
            "USD",
            "accessories",
            19,
            990000000
        )
    );

    Ok(())
}

#[tokio::test]
async fn splits_quoted_category_field_on_commas() -> Result<(), Error> {
    let records = export_fixture().await?;

    assert_eq!(records[1].categories, vec!["clothing", "tops"]);
    assert_eq!(records[3].categories, vec!["footwear", "shoes"]);

    Ok(())
}

#[tokio::test]
async fn keeps_category_list_empty_for_rows_without_categories() -> Result<(), Error> {
    let records = export_fixture().await?;

    assert_eq!(records[5].categories.len(), 0);
    assert_eq!(records[5].description, "");
    assert_eq!(records[5].price_usd, Money::new("USD", 25, 0));

    Ok(())
}

#[tokio::test]
async fn reads_semicolon_delimited_feed_from_memory() -> Result<(), Error> {
    let feed = "id;name;description;picture;currency;categories;units;nanos\n\
                3;PC;Gamer;pc.jpg;EUR;tech;1200;500\n";

    let sender = TestRecordSender::default();

    FeedReader::new(b';', true)
        .process(
            feed.as_bytes(),
            MapperObserver::from((ProductFeedMapper, sender.clone())),
        )
        .await?;

    assert_eq!(
        *sender.values().await,
        vec![Product::from_row(
            "3", "PC", "Gamer", "pc.jpg", "EUR", "tech", 1200, 500
        )]
    );

    Ok(())
}

#[tokio::test]
async fn maps_headerless_feed_with_standard_product_layout() -> Result<(), Error> {
    let feed = "2,Taza,Cerámica,taza.jpg,USD,,10,0\n";

    let sender = TestRecordSender::default();

    FeedReader::new(b',', false)
        .process(
            feed.as_bytes(),
            MapperObserver::from((ProductFeedMapper, sender.clone())),
        )
        .await?;

    assert_eq!(
        *sender.values().await,
        vec![Product::from_row(
            "2", "Taza", "Cerámica", "taza.jpg", "USD", "", 10, 0
        )]
    );

    Ok(())
}

#[tokio::test]
async fn detects_feed_columns_from_header() -> Result<(), Error> {
    let schema = FeedReader::default().read_schema(File::open(fixture_path("catalog.csv"))?)?;

    assert_eq!(
        schema,
        HeaderSchema::new([
            "id",
            "name",
            "description",
            "picture",
            "currency",
            "categories",
            "units",
            "nanos"
        ])
    );

    Ok(())
}

#[tokio::test]
async fn custom_mapper_receives_every_feed_row() -> Result<(), Error> {
    struct NameMapper;

    impl FeedMapper<String> for NameMapper {
        fn map_row(
            &self,
            row: &FeedRow,
            schema: &impl FeedSchema,
        ) -> Result<Option<String>, Error> {
            Ok(Some(row.parse("name", schema)?))
        }
    }

    let sender = TestRecordSender::default();

    FeedReader::default()
        .process(
            File::open(fixture_path("catalog.csv"))?,
            MapperObserver::from((NameMapper, sender.clone())),
        )
        .await?;

    assert_eq!(
        *sender.values().await,
        vec![
            "Sunglasses",
            "Tank Top",
            "Watch",
            "Loafers",
            "Candle Holder",
            "Gift Card"
        ]
    );

    Ok(())
}

async fn export_fixture() -> Result<Vec<Product>, Error> {
    let sender = TestRecordSender::default();

    FeedReader::default()
        .process(
            File::open(fixture_path("catalog.csv"))?,
            MapperObserver::from((ProductFeedMapper, sender.clone())),
        )
        .await?;

    let records = sender.values().await.clone();

    Ok(records)
}
