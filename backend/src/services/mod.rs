//! Business logic services for the GDASH weather backend

pub mod auth;
pub mod collector;
pub mod insights;
pub mod reporting;
pub mod users;
pub mod weather;

pub use auth::AuthService;
pub use collector::spawn_collector;
pub use insights::InsightsService;
pub use reporting::ReportingService;
pub use users::UserService;
pub use weather::WeatherService;
