//! HTTP request handlers

pub mod auth;
pub mod health;
pub mod users;
pub mod weather;

pub use auth::{login, me};
pub use health::{health_check, root};
pub use users::{create_user, delete_user, get_user, list_users, update_user};
pub use weather::{
    create_log, export_analysis_csv, export_csv, export_xlsx, get_analysis, get_insights,
    list_logs,
};
