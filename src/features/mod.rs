pub mod exports;
pub mod people;
pub mod recap;
pub mod regions;
