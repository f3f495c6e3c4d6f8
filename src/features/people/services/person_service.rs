use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::people::models::{PersonDetail, PersonInput, PersonQuery};
use crate::features::people::repositories::PersonRepository;

/// CRUD over person records.
///
/// Field validation happens before `save` is called; the service trusts its input.
pub struct PersonService {
    repo: Arc<dyn PersonRepository>,
}

impl PersonService {
    pub fn new(repo: Arc<dyn PersonRepository>) -> Self {
        Self { repo }
    }

    /// List people matching the search term, ordered by the sort key
    pub async fn list(&self, query: &PersonQuery) -> Result<Vec<PersonDetail>> {
        self.repo.list(query).await
    }

    /// Get one person by identifier
    pub async fn get(&self, id: Uuid) -> Result<PersonDetail> {
        self.repo
            .find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Person with id {} not found", id)))
    }

    /// Insert when `id` is absent, otherwise replace every field of the existing record.
    ///
    /// Updating an unknown identifier fails with NotFound. Concurrent updates to the
    /// same record are last-write-wins.
    pub async fn save(&self, id: Option<Uuid>, input: PersonInput) -> Result<PersonDetail> {
        match id {
            Some(id) => {
                let person = self.repo.update(id, &input).await?.ok_or_else(|| {
                    AppError::NotFound(format!("Person with id {} not found", id))
                })?;
                tracing::info!(person_id = %id, "Person updated");
                Ok(person)
            }
            None => {
                let person = self.repo.insert(&input).await?;
                tracing::info!(person_id = %person.person.id, "Person created");
                Ok(person)
            }
        }
    }

    /// Delete by identifier; unknown identifiers fail with NotFound
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(format!(
                "Person with id {} not found",
                id
            )));
        }
        tracing::info!(person_id = %id, "Person deleted");
        Ok(())
    }
}
