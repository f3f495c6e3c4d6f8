mod person_dto;

pub use person_dto::*;
