use crate::error::Error;
use crate::schema::FeedSchema;
use crate::ROW_BUFFER_SIZE;
use csv::StringRecord;
use smallvec::SmallVec;
use std::any::type_name;
use std::str::FromStr;

/// One raw feed row as an ordered list of string fields.
#[derive(Debug, PartialEq, Clone)]
pub struct FeedRow {
    values: SmallVec<[String; ROW_BUFFER_SIZE]>,
}

impl FeedRow {
    pub fn new(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A row where every field is an empty string carries no record data.
    pub fn is_blank(&self) -> bool {
        self.values.iter().all(|value| value.is_empty())
    }

    pub fn value(&self, column: impl AsRef<str>, schema: &impl FeedSchema) -> Result<&str, Error> {
        let position = schema
            .column_position(&column)
            .ok_or_else(|| Error::ColumnNotFound(column.as_ref().to_string()))?;

        self.get(position)
            .ok_or_else(|| Error::ColumnNotFound(column.as_ref().to_string()))
    }

    pub fn parse<T>(&self, column: impl AsRef<str>, schema: &impl FeedSchema) -> Result<T, Error>
    where
        T: FromStr,
    {
        let value = self.value(&column, schema)?;

        value.parse().map_err(|_| {
            Error::ColumnParseError(
                value.to_string(),
                type_name::<T>(),
                column.as_ref().to_string(),
            )
        })
    }
}

impl From<&StringRecord> for FeedRow {
    fn from(record: &StringRecord) -> Self {
        Self::new(record.iter())
    }
}
