mod education;
mod person;
mod sort_key;

pub use education::Education;
pub use person::{Person, PersonDetail, PersonInput, PersonQuery};
pub use sort_key::SortKey;
