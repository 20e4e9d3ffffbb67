use crate::catalog::RecordSender;
use crate::error::Error;
use crate::feed::{FeedObserver, FeedRow};
use crate::mapper::FeedMapper;
use crate::schema::FeedSchema;

pub struct MapperObserver<M, S> {
    mapper: M,
    sender: S,
}

impl<M, S> From<(M, S)> for MapperObserver<M, S> {
    fn from((mapper, sender): (M, S)) -> Self {
        MapperObserver { mapper, sender }
    }
}

impl<M, S> FeedObserver for MapperObserver<M, S>
where
    S: RecordSender,
    M: FeedMapper<S::Item>,
{
    async fn process_row(&self, row: FeedRow, schema: &impl FeedSchema) -> Result<(), Error> {
        match self.mapper.map_row(&row, schema)? {
            Some(record) => self.sender.send(record).await?,
            None => (),
        }

        Ok(())
    }
}
