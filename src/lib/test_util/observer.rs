use crate::error::Error;
use crate::feed::{FeedObserver, FeedRow};
use crate::schema::FeedSchema;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default, Clone)]
pub struct ObserverSpy {
    processed_row_count: Arc<AtomicUsize>,
    rows: Arc<Mutex<Vec<FeedRow>>>,
}

impl ObserverSpy {
    pub fn processed_row_count(&self) -> usize {
        self.processed_row_count.load(Ordering::Relaxed)
    }

    pub fn rows(&self) -> Vec<FeedRow> {
        self.rows.lock().unwrap().clone()
    }
}

impl FeedObserver for ObserverSpy {
    async fn process_row(&self, row: FeedRow, _schema: &impl FeedSchema) -> Result<(), Error> {
        self.processed_row_count.fetch_add(1, Ordering::Relaxed);
        self.rows.lock().unwrap().push(row);
        Ok(())
    }
}
