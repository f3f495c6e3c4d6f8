mod recap_handler;

pub use recap_handler::*;
