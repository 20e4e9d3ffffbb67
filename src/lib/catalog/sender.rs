use crate::error::Error;
use tokio::sync::mpsc::Sender;

/// Hands mapped catalog records over to whatever writes them out.
pub trait RecordSender {
    type Item;

    async fn send(&self, record: Self::Item) -> Result<(), Error>;
}

impl<T> RecordSender for Sender<T>
where
    T: Send,
{
    type Item = T;

    async fn send(&self, record: Self::Item) -> Result<(), Error> {
        Sender::send(self, record)
            .await
            .map_err(|_| Error::Synchronization)
    }
}
