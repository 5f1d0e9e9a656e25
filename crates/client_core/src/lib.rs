//! Client-side pipeline for the employee records viewer: the in-memory record
//! store, the HTTP gateway to the employee API, the search filter and the view
//! projections every front end draws from.

pub mod filter;
pub mod gateway;
pub mod settings;
pub mod store;
pub mod views;

pub use filter::filter_records;
pub use gateway::{load_or_empty, EmployeeGateway, HttpEmployeeGateway};
pub use settings::{load_settings, ClientSettings};
pub use store::RecordStore;
pub use views::{render_dashboard, DashboardView, RecentRow, SummaryCards, TableRow};
