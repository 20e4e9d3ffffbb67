use crate::error::Error;
use crate::feed::{FeedObserver, FeedRow};
use crate::schema::HeaderSchema;
use csv::{Reader, ReaderBuilder};
use std::io::Read;

/// Streams rows of a delimited catalog feed into an observer.
pub struct FeedReader {
    delimiter: u8,
    headers: bool,
}

impl FeedReader {
    pub fn new(delimiter: u8, headers: bool) -> Self {
        Self { delimiter, headers }
    }

    /// Column layout of the given feed: its header row when the feed carries
    /// one, the standard product feed layout otherwise.
    pub fn read_schema(&self, input: impl Read) -> Result<HeaderSchema, Error> {
        if !self.headers {
            return Ok(HeaderSchema::default());
        }

        match self.create_reader(input).records().next() {
            Some(record) => Ok(HeaderSchema::from(&record?)),
            None => Ok(HeaderSchema::default()),
        }
    }

    pub async fn process(
        &self,
        input: impl Read,
        observer: impl FeedObserver,
    ) -> Result<(), Error> {
        let mut reader = self.create_reader(input);
        let mut records = reader.records();

        let schema = match self.headers {
            true => match records.next() {
                Some(record) => HeaderSchema::from(&record?),
                None => return Ok(()),
            },
            false => HeaderSchema::default(),
        };

        let mut rows = 0usize;

        for record in records {
            observer.process_row(FeedRow::from(&record?), &schema).await?;
            rows += 1;
        }

        tracing::debug!(rows, "finished reading catalog feed");

        Ok(())
    }

    fn create_reader(&self, input: impl Read) -> Reader<impl Read> {
        ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(input)
    }
}

impl Default for FeedReader {
    fn default() -> Self {
        Self::new(b',', true)
    }
}
