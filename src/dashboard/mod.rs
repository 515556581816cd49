pub mod loader;
pub mod state;

pub use loader::{load_dashboard, DashboardHandle, Notify};
pub use state::{DashboardPhase, DashboardState};
