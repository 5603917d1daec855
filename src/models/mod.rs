pub mod chart;
pub mod report;
pub mod transaction;

pub use chart::{BarChartData, PieChartData, PieSlice};
pub use report::{CustomerSummary, RankedResult, TopClientsReport};
pub use transaction::{Transaction, SAMPLE_SALES};
