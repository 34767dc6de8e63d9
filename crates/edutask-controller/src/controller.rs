//! Generic CRUD controller over a [`Dao`].

use bson::{doc, Document};
use edutask_core::{DocumentId, EdutaskError, EdutaskResult};
use edutask_repository::Dao;
use tracing::{debug, info};

/// CRUD operations for one resource, addressed by hex string ids.
///
/// Ids arriving from callers are parsed here; a malformed id is an
/// `InvalidArgument` and never reaches the store.
#[derive(Debug, Clone)]
pub struct Controller {
    dao: Dao,
    resource: &'static str,
}

impl Controller {
    /// Creates a controller for `resource` backed by `dao`.
    #[must_use]
    pub fn new(dao: Dao, resource: &'static str) -> Self {
        Self { dao, resource }
    }

    /// Returns the underlying DAO.
    #[must_use]
    pub fn dao(&self) -> &Dao {
        &self.dao
    }

    /// Creates a document and returns it with its `_id`.
    pub async fn create(&self, data: Document) -> EdutaskResult<Document> {
        debug!("Creating {}", self.resource);
        let created = self.dao.create(data).await?;
        info!("{} created", self.resource);
        Ok(created)
    }

    /// Returns the document with `id`.
    pub async fn get(&self, id: &str) -> EdutaskResult<Document> {
        debug!("Getting {}: {}", self.resource, id);
        let id = DocumentId::parse(id)?;

        self.dao
            .find_by_id(&id)
            .await?
            .ok_or_else(|| EdutaskError::not_found(self.resource, id))
    }

    /// Returns every document of this resource.
    pub async fn get_all(&self) -> EdutaskResult<Vec<Document>> {
        debug!("Listing {}", self.resource);
        self.dao.find(Document::new()).await
    }

    /// Sets the fields in `data` on the document with `id` and returns the
    /// updated document.
    pub async fn update(&self, id: &str, data: Document) -> EdutaskResult<Document> {
        debug!("Updating {}: {}", self.resource, id);
        let id = DocumentId::parse(id)?;

        if !self.dao.update(&id, doc! { "$set": data }).await? {
            return Err(EdutaskError::not_found(self.resource, id));
        }

        self.dao
            .find_by_id(&id)
            .await?
            .ok_or_else(|| EdutaskError::not_found(self.resource, id))
    }

    /// Deletes the document with `id`.
    pub async fn delete(&self, id: &str) -> EdutaskResult<()> {
        debug!("Deleting {}: {}", self.resource, id);
        let id = DocumentId::parse(id)?;

        if !self.dao.delete(&id).await? {
            return Err(EdutaskError::not_found(self.resource, id));
        }

        info!("{} deleted: {}", self.resource, id);
        Ok(())
    }
}
