// Utils compartidos

pub mod constants;
pub mod dates;
pub mod format;
pub mod storage;

pub use constants::*;
pub use dates::{format_date, sort_key};
pub use format::format_inr;
pub use storage::*;
