mod bucket;
mod recap_row;
mod recap_type;

pub use bucket::{
    age_bracket, income_bracket, percentage, RecapBucket, AGE_BRACKETS, INCOME_BRACKETS,
};
pub use recap_row::RecapRow;
pub use recap_type::RecapType;
