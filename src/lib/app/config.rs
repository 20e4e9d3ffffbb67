use crate::feed::FeedReader;
use serde::de::{Error, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt::Formatter;

/// Field separator of a feed file, a single ASCII character.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Delimiter(u8);

#[derive(Deserialize, PartialEq, Debug, Clone)]
pub struct FeedConfig {
    #[serde(default)]
    delimiter: Delimiter,
    #[serde(default = "FeedConfig::default_headers")]
    headers: bool,
    #[serde(default = "FeedConfig::default_batch_size")]
    batch_size: usize,
}

impl FeedConfig {
    fn default_headers() -> bool {
        true
    }

    fn default_batch_size() -> usize {
        10000
    }

    pub fn new(delimiter: impl Into<Delimiter>) -> Self {
        Self {
            delimiter: delimiter.into(),
            headers: Self::default_headers(),
            batch_size: Self::default_batch_size(),
        }
    }

    pub fn without_headers(mut self) -> Self {
        self.headers = false;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn headers(&self) -> bool {
        self.headers
    }

    pub fn delimiter(&self) -> u8 {
        self.delimiter.0
    }

    pub fn create_reader(&self) -> FeedReader {
        FeedReader::new(self.delimiter.0, self.headers)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self::new(Delimiter::default())
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(b',')
    }
}

impl From<u8> for Delimiter {
    fn from(value: u8) -> Self {
        Delimiter(value)
    }
}

impl<'de> Deserialize<'de> for Delimiter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DelimiterVisitor;

        impl<'de> Visitor<'de> for DelimiterVisitor {
            type Value = Delimiter;

            fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
                formatter.write_str("a single ASCII character or \"tab\"")
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: Error,
            {
                match value.as_bytes() {
                    b"tab" => Ok(Delimiter(b'\t')),
                    [separator] if separator.is_ascii() => Ok(Delimiter(*separator)),
                    _ => Err(E::custom(format!(
                        "cannot use {value:?} as feed field delimiter"
                    ))),
                }
            }
        }

        deserializer.deserialize_str(DelimiterVisitor)
    }
}
