use bigdecimal::{BigDecimal, Zero};
use indexmap::IndexMap;

use crate::models::{CustomerSummary, RankedResult, Transaction};

/// 排名保留的客户数量上限
pub const TOP_N: usize = 10;

/// 单个客户的累计值 (分组阶段用)
#[derive(Debug, Default)]
struct GroupTotals {
    total_spent: BigDecimal,
    total_quantity: BigDecimal,
    purchases: u64,
}

/// 排名聚合器：分组 → 统计 → 降序排序 → 截断
///
/// 纯函数, 不修改输入；相同输入产出完全相同的结果。
/// 客户键按原样精确匹配, 不做去空格或大小写归一。
pub struct RankingAggregator {
    top_n: usize,
}

impl Default for RankingAggregator {
    fn default() -> Self {
        Self { top_n: TOP_N }
    }
}

impl RankingAggregator {
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// 聚合交易记录, 产出排名结果和两个汇总标量
    ///
    /// grand_total / customer_count 只覆盖截断后保留的客户。
    pub fn aggregate(&self, transactions: &[Transaction]) -> RankedResult {
        // 1. 按客户分组累加 (IndexMap 保证首次出现顺序确定)
        let mut groups: IndexMap<String, GroupTotals> = IndexMap::new();
        for tx in transactions {
            let acc = groups.entry(tx.customer.clone()).or_default();
            acc.total_spent += &tx.total_price;
            acc.total_quantity += &tx.quantity;
            acc.purchases += 1;
        }

        // 2. 计算每组的四项统计
        let mut summaries: Vec<CustomerSummary> = groups
            .into_iter()
            .map(|(customer, acc)| {
                let average_order_value =
                    acc.total_spent.clone() / BigDecimal::from(acc.purchases);
                CustomerSummary {
                    customer,
                    total_spent: acc.total_spent,
                    average_order_value,
                    number_of_purchases: acc.purchases,
                    total_quantity: acc.total_quantity,
                }
            })
            .collect();

        // 3. 按 total_spent 降序, 金额相同时按客户名字典序
        summaries.sort_by(|a, b| {
            b.total_spent
                .cmp(&a.total_spent)
                .then_with(|| a.customer.cmp(&b.customer))
        });

        // 4. 截断到前 N 个
        summaries.truncate(self.top_n);

        // 5. 汇总标量只统计保留的组
        let grand_total = summaries
            .iter()
            .fold(BigDecimal::zero(), |acc, s| acc + &s.total_spent);

        RankedResult {
            customer_count: summaries.len(),
            top_clients: summaries,
            grand_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(customer: &str, quantity: i64, total_price: i64) -> Transaction {
        Transaction {
            customer: customer.to_string(),
            quantity: BigDecimal::from(quantity),
            total_price: BigDecimal::from(total_price),
        }
    }

    #[test]
    fn computes_the_four_statistics_per_customer() {
        let transactions = vec![tx("A", 1, 10), tx("A", 2, 20), tx("B", 5, 100)];
        let result = RankingAggregator::default().aggregate(&transactions);

        let a = result
            .top_clients
            .iter()
            .find(|s| s.customer == "A")
            .unwrap();
        assert_eq!(a.total_spent, BigDecimal::from(30));
        assert_eq!(a.average_order_value, BigDecimal::from(15));
        assert_eq!(a.number_of_purchases, 2);
        assert_eq!(a.total_quantity, BigDecimal::from(3));

        let b = result
            .top_clients
            .iter()
            .find(|s| s.customer == "B")
            .unwrap();
        assert_eq!(b.total_spent, BigDecimal::from(100));
        assert_eq!(b.average_order_value, BigDecimal::from(100));
        assert_eq!(b.number_of_purchases, 1);
        assert_eq!(b.total_quantity, BigDecimal::from(5));
    }

    #[test]
    fn ranks_by_total_spent_descending() {
        let transactions = vec![tx("A", 1, 10), tx("A", 2, 20), tx("B", 5, 100)];
        let result = RankingAggregator::default().aggregate(&transactions);

        assert_eq!(result.top_clients[0].customer, "B");
        assert_eq!(result.top_clients[1].customer, "A");
    }

    #[test]
    fn equal_totals_break_ties_lexicographically() {
        let transactions = vec![tx("Zeta", 1, 50), tx("Alpha", 1, 50), tx("Beta", 1, 50)];
        let result = RankingAggregator::default().aggregate(&transactions);

        let names: Vec<&str> = result
            .top_clients
            .iter()
            .map(|s| s.customer.as_str())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn truncates_to_top_ten_and_sums_only_kept_groups() {
        // 15 个客户, 金额 100..1500
        let transactions: Vec<Transaction> = (1..=15)
            .map(|i| tx(&format!("Client {i:02}"), 1, i * 100))
            .collect();
        let result = RankingAggregator::default().aggregate(&transactions);

        assert_eq!(result.top_clients.len(), 10);
        assert_eq!(result.customer_count, 10);

        // 前 10 名是 600..1500, 合计 10500 (不是全量的 12000)
        let expected: i64 = (6..=15).map(|i| i * 100).sum();
        assert_eq!(result.grand_total, BigDecimal::from(expected));
    }

    #[test]
    fn customer_keys_match_exactly_without_normalization() {
        let transactions = vec![tx("Alpha", 1, 10), tx("alpha", 1, 20), tx(" Alpha", 1, 30)];
        let result = RankingAggregator::default().aggregate(&transactions);

        assert_eq!(result.top_clients.len(), 3);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let transactions = vec![tx("A", 1, 10), tx("B", 2, 20), tx("A", 3, 7)];
        let aggregator = RankingAggregator::default();

        let first = aggregator.aggregate(&transactions);
        let second = aggregator.aggregate(&transactions);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn empty_input_yields_empty_result_with_zero_total() {
        let result = RankingAggregator::default().aggregate(&[]);

        assert!(result.top_clients.is_empty());
        assert_eq!(result.customer_count, 0);
        assert_eq!(result.grand_total, BigDecimal::zero());
    }
}
