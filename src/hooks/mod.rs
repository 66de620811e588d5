pub mod use_dashboard;
pub mod use_session;

pub use use_dashboard::{use_dashboard, UseDashboardHandle};
pub use use_session::{use_session, UseSessionHandle};
