//! Recap (rekap): population counts and percentages grouped by age bracket,
//! income bracket, education level or region.
//!
//! Buckets are computed in code from the region-filtered person columns, using the
//! boundary tables in [`models`]. Only non-empty buckets are returned.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/recap?type=&provinceCode=&regencyCode=&districtCode=` | Compute a recap |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgRecapRepository;
pub use services::RecapService;
