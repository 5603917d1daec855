pub mod aggregator;
pub mod report;
pub mod validator;

pub use aggregator::{RankingAggregator, TOP_N};
pub use report::ReportService;
pub use validator::{validate_columns, ColumnMap, REQUIRED_COLUMNS};
