#[macro_export]
macro_rules! feed_row {
    ($($value:expr),+ $(,)?) => {
        ($crate::feed::FeedRow::new(::std::vec![$(::std::string::ToString::to_string(&$value)),+]))
    };
}

#[macro_export]
macro_rules! test_schema {
    [$($column:expr),+ $(,)?] => {
        ($crate::test_util::TestFeedSchema::new(&[$($column),+]))
    };
}

macro_rules! mapper_test {
    ($mapper:expr, $expected:expr, [$($value:expr),+], [$($column:expr),+]) => {
        let schema = test_schema![$($column),+];
        let row = feed_row!($($value),+);

        assert_eq!(
            $crate::mapper::FeedMapper::map_row(&$mapper, &row, &schema).unwrap(),
            $expected
        );
    };
}

macro_rules! output_test {
    ($formatter:expr, $record:expr, $expected:expr) => {
        let mut buffer = Cursor::new(Vec::new());
        $crate::output::Output::write(&$formatter, &mut buffer, &$record)
            .await
            .unwrap();

        assert_eq!($expected, buffer.into_inner().into())
    };
}
