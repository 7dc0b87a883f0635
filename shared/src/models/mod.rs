//! Domain models for the GDASH weather dashboard

mod analysis;
mod insights;
mod sector;
mod user;
mod weather;

pub use analysis::*;
pub use insights::*;
pub use sector::*;
pub use user::*;
pub use weather::*;
