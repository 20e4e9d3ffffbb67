use crate::catalog::RecordSender;
use crate::error::Error;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard};

pub struct TestRecordSender<T> {
    values: Arc<Mutex<Vec<T>>>,
}

impl<T> Default for TestRecordSender<T> {
    fn default() -> Self {
        Self {
            values: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T> Clone for TestRecordSender<T> {
    fn clone(&self) -> Self {
        Self {
            values: Arc::clone(&self.values),
        }
    }
}

impl<T> TestRecordSender<T> {
    pub async fn values(&self) -> MutexGuard<'_, Vec<T>> {
        self.values.lock().await
    }
}

impl<T> RecordSender for TestRecordSender<T> {
    type Item = T;

    async fn send(&self, record: Self::Item) -> Result<(), Error> {
        let mut values = self.values.lock().await;
        values.push(record);

        Ok(())
    }
}
