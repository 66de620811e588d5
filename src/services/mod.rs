pub mod sheet_service;

pub use sheet_service::{decode_row, fetch_shipments};
