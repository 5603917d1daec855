use thiserror::Error;

/// 统一错误类型：每次上传独立失败，进程不受影响
#[derive(Debug, Error)]
pub enum DashboardError {
    /// 上传文件缺少必需列
    #[error("the file must contain the columns Client, Quantity, Total Price (missing: {})", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },

    /// 数值列中出现无法解析的内容
    #[error("non-numeric value {value:?} in column '{column}' at row {row}")]
    MalformedNumericField {
        row: usize,
        column: String,
        value: String,
    },

    /// 工作簿中没有任何工作表
    #[error("the workbook contains no sheets")]
    EmptyWorkbook,

    /// 读取 Excel 失败 (文件损坏、格式不支持等)
    #[error("failed to read the file: {0}")]
    WorkbookRead(#[from] calamine::Error),

    /// 生成 Excel 失败
    #[error("failed to build the workbook: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    /// multipart 上传体不完整或读取失败
    #[error("invalid upload: {0}")]
    Upload(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
