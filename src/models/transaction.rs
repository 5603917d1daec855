use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// 销售交易记录 (上传文件中的一行)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub customer: String,
    pub quantity: BigDecimal,
    pub total_price: BigDecimal,
}

/// 模板文件的演示数据 (固定 10 行: 客户名, 数量, 总金额)
pub const SAMPLE_SALES: [(&str, f64, f64); 10] = [
    ("Entreprise Alpha", 120.0, 12000.0),
    ("Société Beta", 85.0, 8500.0),
    ("Groupe Gamma", 150.0, 15000.0),
    ("SARL Delta", 95.0, 9500.0),
    ("Holding Epsilon", 110.0, 11000.0),
    ("Agence Zeta", 80.0, 8000.0),
    ("Industrie Eta", 135.0, 13500.0),
    ("Entreprise Theta", 90.0, 9000.0),
    ("Groupe Iota", 100.0, 10000.0),
    ("SARL Kappa", 75.0, 7500.0),
];
