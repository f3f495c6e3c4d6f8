//! Indonesian administrative regions (wilayah) lookup.
//!
//! Read-only reference data used by the person form, the people list and the
//! recap filters.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Provinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota), scoped to a province
//! - Level 3: Districts (Kecamatan), scoped to a regency
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/regions/provinces` | List all provinces |
//! | GET | `/api/regions/provinces/{code}/regencies` | List regencies in a province |
//! | GET | `/api/regions/regencies?provinceCode=` | Same, by query parameter |
//! | GET | `/api/regions/regencies/{code}/districts` | List districts in a regency |
//! | GET | `/api/regions/districts?regencyCode=` | Same, by query parameter |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod selection;
pub mod services;

pub use repositories::{PgRegionRepository, RegionRepository};
pub use services::RegionService;
