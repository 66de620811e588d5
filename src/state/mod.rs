pub mod dashboard;

pub use dashboard::{Dashboard, Party, Summary, FILTER_ALL};
