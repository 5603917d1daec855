pub mod api;
pub mod config;
pub mod error;
pub mod excel;
pub mod models;
pub mod service;

pub use config::AppConfig;
pub use error::DashboardError;
pub use service::ReportService;
