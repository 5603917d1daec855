use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::models::chart::{BarChartData, PieChartData};

/// 单个客户的汇总统计 (输出表中的一行)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub customer: String,
    pub total_spent: BigDecimal,
    pub average_order_value: BigDecimal,
    pub number_of_purchases: u64,
    pub total_quantity: BigDecimal,
}

/// 排名结果：按 total_spent 降序的前 N 个客户 + 两个汇总标量
///
/// grand_total 只统计保留下来的客户 (截断之后), 不是全量客户。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub top_clients: Vec<CustomerSummary>,
    pub grand_total: BigDecimal,
    pub customer_count: usize,
}

/// 完整报表：排名结果 + 图表数据 (HTTP 响应体)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopClientsReport {
    pub top_clients: Vec<CustomerSummary>,
    pub grand_total: BigDecimal,
    pub customer_count: usize,
    pub bar_chart: BarChartData,
    pub pie_chart: PieChartData,
}

impl TopClientsReport {
    pub fn from_ranked(ranked: RankedResult) -> Self {
        let bar_chart = BarChartData::from_ranked(&ranked);
        let pie_chart = PieChartData::from_ranked(&ranked);
        Self {
            top_clients: ranked.top_clients,
            grand_total: ranked.grand_total,
            customer_count: ranked.customer_count,
            bar_chart,
            pie_chart,
        }
    }
}
