mod recap_service;

pub use recap_service::{aggregate, RecapService};
