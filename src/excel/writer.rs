use bigdecimal::ToPrimitive;
use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::models::{TopClientsReport, SAMPLE_SALES};
use crate::service::validator::REQUIRED_COLUMNS;

/// 模板下载的文件名
pub const TEMPLATE_FILE_NAME: &str = "modele_ventes.xlsx";
/// 结果下载的文件名
pub const RESULTS_FILE_NAME: &str = "top_clients.xlsx";
/// xlsx 的标准 MIME 类型
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// 结果表的列头 (Client 之后是四项统计)
const REPORT_COLUMNS: [&str; 5] = [
    "Client",
    "total_spent",
    "average_order_value",
    "number_of_purchases",
    "total_quantity",
];

/// 生成模板工作簿：三列表头 + 固定 10 行演示数据
pub fn template_workbook() -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Modèle")?;

    for (col, name) in REQUIRED_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (idx, (client, quantity, total_price)) in SAMPLE_SALES.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, *client)?;
        sheet.write_number(row, 1, *quantity)?;
        sheet.write_number(row, 2, *total_price)?;
    }

    Ok(workbook.save_to_buffer()?)
}

/// 将计算好的报表序列化为结果工作簿 (每个保留客户一行)
pub fn report_workbook(report: &TopClientsReport) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Top Clients")?;

    for (col, name) in REPORT_COLUMNS.iter().enumerate() {
        sheet.write_string(0, col as u16, *name)?;
    }
    for (idx, summary) in report.top_clients.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, summary.customer.as_str())?;
        sheet.write_number(row, 1, summary.total_spent.to_f64().unwrap_or(0.0))?;
        sheet.write_number(
            row,
            2,
            summary.average_order_value.to_f64().unwrap_or(0.0),
        )?;
        sheet.write_number(row, 3, summary.number_of_purchases as f64)?;
        sheet.write_number(row, 4, summary.total_quantity.to_f64().unwrap_or(0.0))?;
    }

    Ok(workbook.save_to_buffer()?)
}
