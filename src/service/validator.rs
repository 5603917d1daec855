use crate::error::{DashboardError, Result};

/// 上传文件必须包含的三列 (大小写与拼写完全一致)
pub const REQUIRED_COLUMNS: [&str; 3] = ["Client", "Quantity", "Total Price"];

/// 三个必需列在表头中的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMap {
    pub client: usize,
    pub quantity: usize,
    pub total_price: usize,
}

/// 校验表头：三列齐全则返回列位置, 否则报告所有缺失的列名
///
/// 多余的列被忽略；零行数据不影响校验结果。
pub fn validate_columns(headers: &[String]) -> Result<ColumnMap> {
    let find = |name: &str| headers.iter().position(|h| h == name);

    let client = find(REQUIRED_COLUMNS[0]);
    let quantity = find(REQUIRED_COLUMNS[1]);
    let total_price = find(REQUIRED_COLUMNS[2]);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .zip([client, quantity, total_price])
        .filter(|(_, found)| found.is_none())
        .map(|(name, _)| name.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(DashboardError::MissingColumns { missing });
    }

    // missing 为空时三个 position 必然都存在
    Ok(ColumnMap {
        client: client.unwrap_or_default(),
        quantity: quantity.unwrap_or_default(),
        total_price: total_price.unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn accepts_exact_columns_in_any_order() {
        let map = validate_columns(&headers(&["Total Price", "Client", "Quantity"])).unwrap();
        assert_eq!(map.client, 1);
        assert_eq!(map.quantity, 2);
        assert_eq!(map.total_price, 0);
    }

    #[test]
    fn ignores_extra_columns() {
        let map =
            validate_columns(&headers(&["Date", "Client", "Quantity", "Total Price", "Notes"]))
                .unwrap();
        assert_eq!(map.client, 1);
        assert_eq!(map.total_price, 3);
    }

    #[test]
    fn rejects_missing_quantity() {
        let err = validate_columns(&headers(&["Client", "Total Price"])).unwrap_err();
        match err {
            DashboardError::MissingColumns { missing } => {
                assert_eq!(missing, vec!["Quantity".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_every_missing_column() {
        let err = validate_columns(&headers(&["Something"])).unwrap_err();
        match err {
            DashboardError::MissingColumns { missing } => {
                assert_eq!(missing, vec!["Client", "Quantity", "Total Price"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn column_match_is_case_sensitive() {
        let err = validate_columns(&headers(&["client", "quantity", "total price"])).unwrap_err();
        assert!(matches!(err, DashboardError::MissingColumns { .. }));
    }
}
