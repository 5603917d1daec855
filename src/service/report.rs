use crate::error::Result;
use crate::excel::{reader, writer};
use crate::models::TopClientsReport;
use crate::service::RankingAggregator;

/// 报表服务：解析 → 校验 → 聚合 → 图表数据, HTTP 层的唯一入口
///
/// 无状态, 每次上传从零计算；会话之间不保留任何数据。
pub struct ReportService {
    aggregator: RankingAggregator,
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportService {
    pub fn new() -> Self {
        Self {
            aggregator: RankingAggregator::default(),
        }
    }

    /// 从上传的字节流计算 Top Clients 报表
    pub fn build_report(&self, bytes: &[u8]) -> Result<TopClientsReport> {
        // Phase 1: 解析 + 列校验 + 强类型解码
        let transactions = reader::read_transactions(bytes)?;
        tracing::info!("[Report] parsed {} transactions", transactions.len());

        // Phase 2: 分组聚合 + 排名截断
        let ranked = self.aggregator.aggregate(&transactions);
        tracing::info!(
            "[Report] kept {} customers, grand total {}",
            ranked.customer_count,
            ranked.grand_total
        );

        // Phase 3: 图表数据
        Ok(TopClientsReport::from_ranked(ranked))
    }

    /// 计算报表并序列化为结果工作簿 (top_clients.xlsx 的内容)
    pub fn export_report(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let report = self.build_report(bytes)?;
        writer::report_workbook(&report)
    }
}
