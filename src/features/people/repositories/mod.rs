//! Storage seam for person records.

mod postgres;

pub use postgres::PgPersonRepository;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::people::models::{PersonDetail, PersonInput, PersonQuery};

/// Person persistence. Every returned record carries its region display names.
#[async_trait]
pub trait PersonRepository: Send + Sync {
    async fn list(&self, query: &PersonQuery) -> Result<Vec<PersonDetail>>;

    async fn find(&self, id: Uuid) -> Result<Option<PersonDetail>>;

    /// Insert a new record; the store assigns the identifier
    async fn insert(&self, input: &PersonInput) -> Result<PersonDetail>;

    /// Replace every field of an existing record; `None` when `id` does not exist
    async fn update(&self, id: Uuid, input: &PersonInput) -> Result<Option<PersonDetail>>;

    /// Returns false when nothing was deleted
    async fn delete(&self, id: Uuid) -> Result<bool>;
}

/// Escape LIKE wildcards so the term matches literally, then wrap it for substring search
pub fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
