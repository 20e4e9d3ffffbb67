use crate::app::{ApplicationOutput, FeedConfig};
use crate::catalog::{Product, RecordSender};
use crate::error::Error;
use crate::mapper::{FeedMapper, MapperObserver, ProductFeedMapper};
use crate::output::Output;

use serde_json::json;
use std::fs::File;
use std::path::PathBuf;
use tokio::io::{stdout, AsyncWriteExt, BufWriter};
use tokio::sync::mpsc::channel;
use tokio::task::JoinHandle;

pub enum ApplicationCommand {
    Schema(FeedConfig, PathBuf),
    Dump(FeedConfig, ApplicationOutput, PathBuf),
}

pub struct Application<M = ProductFeedMapper>
where
    M: FeedMapper<Product>,
{
    mapper: M,
}

fn create_writer(
    output: ApplicationOutput,
    config: FeedConfig,
) -> (
    impl RecordSender<Item = Product>,
    JoinHandle<Result<(), Error>>,
) {
    let (sender, mut receiver) = channel(10000);

    let handle = tokio::spawn(async move {
        let mut writer = BufWriter::new(stdout());
        let mut pending = 0usize;
        let mut records = 0usize;

        while let Some(record) = receiver.recv().await {
            output.write(&mut writer, &record).await?;
            pending += 1;
            records += 1;

            if pending >= config.batch_size() {
                writer.flush().await?;
                pending = 0;
            }
        }

        writer.flush().await?;

        tracing::info!(records, "finished writing catalog records");

        Ok(())
    });

    (sender, handle)
}

impl Application {
    pub fn new() -> Self {
        Self {
            mapper: ProductFeedMapper,
        }
    }
}

impl<M> Application<M>
where
    M: FeedMapper<Product>,
{
    pub fn with_mapper<N>(self, mapper: N) -> Application<N>
    where
        N: FeedMapper<Product>,
    {
        Application { mapper }
    }

    async fn run_feed_dump(
        self,
        config: FeedConfig,
        output: ApplicationOutput,
        feed: PathBuf,
    ) -> Result<(), Error> {
        let (sender, handle) = create_writer(output, config.clone());
        let reader = config.create_reader();

        tracing::info!(feed = %feed.display(), "dumping catalog records from feed");

        reader
            .process(File::open(feed)?, MapperObserver::from((self.mapper, sender)))
            .await?;

        handle.await.map_err(|_| Error::Synchronization)?
    }

    pub async fn run(self, command: ApplicationCommand) -> Result<(), Error> {
        match command {
            ApplicationCommand::Schema(config, feed) => {
                let schema = config.create_reader().read_schema(File::open(feed)?)?;

                println!(
                    "{}",
                    serde_json::to_string_pretty(&json!({
                        "columns": schema.columns(),
                    }))
                    .map_err(Error::Json)?
                );
            }
            ApplicationCommand::Dump(config, output, feed) => {
                self.run_feed_dump(config, output, feed).await?
            }
        };

        Ok(())
    }
}
