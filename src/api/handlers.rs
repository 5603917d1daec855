use crate::error::DashboardError;
use crate::excel::writer::{self, RESULTS_FILE_NAME, TEMPLATE_FILE_NAME, XLSX_MIME};
use crate::models::TopClientsReport;
use crate::service::ReportService;
use axum::{
    extract::{Multipart, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

/// 报表响应体
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub message: String,
    pub report: Option<TopClientsReport>,
}

/// 健康检查
pub async fn health_check() -> &'static str {
    "OK"
}

/// 模板下载接口 (modele_ventes.xlsx)
pub async fn download_template() -> Response {
    match writer::template_workbook() {
        Ok(bytes) => xlsx_download(bytes, TEMPLATE_FILE_NAME),
        Err(e) => error_response(&e),
    }
}

/// 上传销售文件, 返回 JSON 报表 (排名表 + 汇总标量 + 图表数据)
pub async fn build_report(
    State(service): State<Arc<ReportService>>,
    multipart: Multipart,
) -> Response {
    let bytes = match read_upload(multipart).await {
        Ok(bytes) => bytes,
        Err(e) => return error_response(&e),
    };

    match service.build_report(&bytes) {
        Ok(report) => {
            let response = ReportResponse {
                success: true,
                message: format!("Top {} clients computed", report.customer_count),
                report: Some(report),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => error_response(&e),
    }
}

/// 上传销售文件, 返回结果工作簿下载 (top_clients.xlsx)
///
/// 服务端不保留上一次的报表, 导出重新走一遍完整计算。
pub async fn export_report(
    State(service): State<Arc<ReportService>>,
    multipart: Multipart,
) -> Response {
    let bytes = match read_upload(multipart).await {
        Ok(bytes) => bytes,
        Err(e) => return error_response(&e),
    };

    match service.export_report(&bytes) {
        Ok(workbook) => xlsx_download(workbook, RESULTS_FILE_NAME),
        Err(e) => error_response(&e),
    }
}

/// 取 multipart 中的文件字段 (优先名为 "file" 的字段, 否则第一个带文件名的)
async fn read_upload(mut multipart: Multipart) -> Result<Vec<u8>, DashboardError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DashboardError::Upload(e.to_string()))?
    {
        if field.name() == Some("file") || field.file_name().is_some() {
            let data = field
                .bytes()
                .await
                .map_err(|e| DashboardError::Upload(e.to_string()))?;
            return Ok(data.to_vec());
        }
    }

    Err(DashboardError::Upload(
        "no file field in the multipart body".to_string(),
    ))
}

fn status_for(err: &DashboardError) -> StatusCode {
    match err {
        DashboardError::MissingColumns { .. }
        | DashboardError::MalformedNumericField { .. }
        | DashboardError::EmptyWorkbook
        | DashboardError::WorkbookRead(_)
        | DashboardError::Upload(_) => StatusCode::BAD_REQUEST,
        DashboardError::WorkbookWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: &DashboardError) -> Response {
    tracing::warn!("[Report] upload rejected: {}", err);
    let response = ReportResponse {
        success: false,
        message: format!("Error: {}", err),
        report: None,
    };
    (status_for(err), Json(response)).into_response()
}

fn xlsx_download(bytes: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, XLSX_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        bytes,
    )
        .into_response()
}
