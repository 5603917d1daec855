use bigdecimal::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::models::report::RankedResult;

/// 水平条形图数据 (每客户一条, 金额升序, 与绘图端 categoryorder 约定一致)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartData {
    pub customers: Vec<String>,
    pub totals: Vec<f64>,
    /// 每条的文字标注, 如 "€12000.00"
    pub labels: Vec<String>,
}

impl BarChartData {
    pub fn from_ranked(ranked: &RankedResult) -> Self {
        let mut customers = Vec::with_capacity(ranked.top_clients.len());
        let mut totals = Vec::with_capacity(ranked.top_clients.len());
        let mut labels = Vec::with_capacity(ranked.top_clients.len());

        // 排名结果已按降序排好, 反向遍历即得升序
        for row in ranked.top_clients.iter().rev() {
            let total = row.total_spent.to_f64().unwrap_or(0.0);
            customers.push(row.customer.clone());
            totals.push(total);
            labels.push(format!("€{:.2}", total));
        }

        Self {
            customers,
            totals,
            labels,
        }
    }
}

/// 饼图的一个扇区：客户及其在 grand_total 中的占比
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub customer: String,
    pub total_spent: f64,
    /// 占比百分数, 保留两位小数
    pub share_percent: f64,
}

/// 饼图数据 (total_spent 在保留客户中的分布)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartData {
    pub slices: Vec<PieSlice>,
}

impl PieChartData {
    pub fn from_ranked(ranked: &RankedResult) -> Self {
        let grand_total = ranked.grand_total.to_f64().unwrap_or(0.0);
        let slices = ranked
            .top_clients
            .iter()
            .map(|row| {
                let total = row.total_spent.to_f64().unwrap_or(0.0);
                let share = if grand_total > 0.0 {
                    total / grand_total * 100.0
                } else {
                    0.0
                };
                PieSlice {
                    customer: row.customer.clone(),
                    total_spent: total,
                    share_percent: (share * 100.0).round() / 100.0,
                }
            })
            .collect();

        Self { slices }
    }
}
