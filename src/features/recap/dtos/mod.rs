mod recap_dto;

pub use recap_dto::*;
