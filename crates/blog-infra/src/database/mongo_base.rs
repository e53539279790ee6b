use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::Document;
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use serde::de::DeserializeOwned;

use blog_core::error::RepoError;
use blog_core::ports::{DeleteOutcome, InsertOutcome};

use super::document::bson_id_to_string;

const DUPLICATE_KEY: i32 = 11000;

/// Generic MongoDB repository over one typed collection.
///
/// Each helper issues exactly one driver call.
pub struct MongoRepository<D>
where
    D: Send + Sync,
{
    pub(crate) collection: Collection<D>,
}

impl<D> MongoRepository<D>
where
    D: Send + Sync,
{
    pub fn new(collection: Collection<D>) -> Self {
        Self { collection }
    }
}

impl<D> MongoRepository<D>
where
    D: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    pub(crate) async fn insert_document(&self, document: D) -> Result<InsertOutcome, RepoError> {
        let result = self
            .collection
            .insert_one(document)
            .await
            .map_err(map_driver_error)?;

        Ok(InsertOutcome::acknowledged(bson_id_to_string(
            &result.inserted_id,
        )))
    }

    pub(crate) async fn find_documents(&self, filter: Document) -> Result<Vec<D>, RepoError> {
        self.collection
            .find(filter)
            .await
            .map_err(map_driver_error)?
            .try_collect()
            .await
            .map_err(map_driver_error)
    }

    pub(crate) async fn find_sorted(
        &self,
        filter: Document,
        sort: Document,
        limit: i64,
    ) -> Result<Vec<D>, RepoError> {
        self.collection
            .find(filter)
            .sort(sort)
            .limit(limit)
            .await
            .map_err(map_driver_error)?
            .try_collect()
            .await
            .map_err(map_driver_error)
    }

    pub(crate) async fn find_one_document(&self, filter: Document) -> Result<Option<D>, RepoError> {
        self.collection
            .find_one(filter)
            .await
            .map_err(map_driver_error)
    }

    pub(crate) async fn delete_one_document(
        &self,
        filter: Document,
    ) -> Result<DeleteOutcome, RepoError> {
        let result = self
            .collection
            .delete_one(filter)
            .await
            .map_err(map_driver_error)?;

        Ok(DeleteOutcome {
            acknowledged: true,
            deleted_count: result.deleted_count,
        })
    }
}

/// Classify a driver error. Nothing here is retried.
pub(crate) fn map_driver_error(e: mongodb::error::Error) -> RepoError {
    match e.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) if write.code == DUPLICATE_KEY => {
            RepoError::Constraint(write.message.clone())
        }
        ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
            RepoError::Connection(e.to_string())
        }
        _ => RepoError::Query(e.to_string()),
    }
}
