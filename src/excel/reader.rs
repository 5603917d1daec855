use std::io::Cursor;

use bigdecimal::{BigDecimal, FromPrimitive};
use calamine::{open_workbook_auto_from_rs, Data, Reader};

use crate::error::{DashboardError, Result};
use crate::models::Transaction;
use crate::service::validator;

/// 从上传的字节流解析交易记录
///
/// 自动识别 .xlsx / .xls, 只读第一个工作表。第一行视为表头,
/// 先做列校验, 再逐行解码为强类型记录。Client 为空的行跳过
/// (对应 pandas groupby 丢弃 NaN 键的行为)。
pub fn read_transactions(bytes: &[u8]) -> Result<Vec<Transaction>> {
    let cursor = Cursor::new(bytes);
    let mut workbook = open_workbook_auto_from_rs(cursor)?;

    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(DashboardError::EmptyWorkbook)?;
    let range = workbook.worksheet_range(&sheet)?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(header_text).collect())
        .unwrap_or_default();
    let columns = validator::validate_columns(&headers)?;

    let mut transactions = Vec::new();
    for (offset, row) in rows.enumerate() {
        // 行号按表格显示习惯 1 起始, 表头占第 1 行
        let row_number = offset + 2;

        let customer = match row.get(columns.client) {
            None | Some(Data::Empty) => continue,
            Some(Data::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        };

        let quantity = decode_numeric(row.get(columns.quantity), row_number, "Quantity")?;
        let total_price =
            decode_numeric(row.get(columns.total_price), row_number, "Total Price")?;

        transactions.push(Transaction {
            customer,
            quantity,
            total_price,
        });
    }

    Ok(transactions)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// 解码数值单元格：浮点 / 整数 / 数字形式的文本, 其余一律报错
fn decode_numeric(cell: Option<&Data>, row: usize, column: &str) -> Result<BigDecimal> {
    let malformed = |value: String| DashboardError::MalformedNumericField {
        row,
        column: column.to_string(),
        value,
    };

    match cell {
        Some(Data::Float(f)) => BigDecimal::from_f64(*f).ok_or_else(|| malformed(f.to_string())),
        Some(Data::Int(i)) => Ok(BigDecimal::from(*i)),
        Some(Data::String(s)) => s
            .trim()
            .parse::<BigDecimal>()
            .map_err(|_| malformed(s.clone())),
        Some(other) => Err(malformed(other.to_string())),
        None => Err(malformed(String::new())),
    }
}
