//! Person (penduduk) records: create, replace, delete, search and sort.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/people` | List with `search`, `sort` and region codes |
//! | POST | `/api/people` | Create, or replace when the body carries an `id` |
//! | GET | `/api/people/{id}` | Get one record |
//! | PUT | `/api/people/{id}` | Replace one record |
//! | DELETE | `/api/people/{id}` | Delete permanently |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{PersonRepository, PgPersonRepository};
pub use services::PersonService;
