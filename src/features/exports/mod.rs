//! CSV downloads of the people list and of recaps.
//!
//! | Method | Endpoint | File |
//! |--------|----------|------|
//! | GET | `/api/exports/people?search=&sort=` | `data-penduduk.csv` |
//! | GET | `/api/exports/recap?type=&provinceCode=&regencyCode=&districtCode=` | `rekap-<type>.csv` |

pub mod handlers;
pub mod routes;
pub mod services;

pub use services::ExportService;
