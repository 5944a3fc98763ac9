use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::Serialize;

use crate::money::MINOR_UNIT_SCALE;
use crate::money::Money;
use crate::sales::SellerId;
use crate::seller_stats::SellerStat;
use crate::seller_stats::TopProduct;

/// One line of the final report. Monetary fields carry exactly two decimal places and are
/// serialized as strings so that no float formatting can alter them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub seller_id: SellerId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub revenue: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub profit: Decimal,
    pub sales_count: u64,
    pub top_products: Vec<TopProduct>,
    #[serde(with = "rust_decimal::serde::str")]
    pub bonus: Decimal,
}

impl From<&SellerStat> for ReportRow {
    fn from(seller_stat: &SellerStat) -> Self {
        Self {
            seller_id: seller_stat.seller_id().clone(),
            name: seller_stat.name().to_owned(),
            revenue: to_report_amount(seller_stat.revenue()),
            profit: to_report_amount(seller_stat.profit()),
            sales_count: seller_stat.sales_count(),
            top_products: seller_stat.top_products().to_vec(),
            bonus: to_report_amount(seller_stat.bonus()),
        }
    }
}

/// Major units rounded half away from zero to two decimal places. A no-op on the value for
/// anything coming out of [`Money`], it only pins the scale.
pub fn to_report_amount(money: Money) -> Decimal {
    let mut amount = money
        .to_major()
        .round_dp_with_strategy(MINOR_UNIT_SCALE, RoundingStrategy::MidpointAwayFromZero);
    amount.rescale(MINOR_UNIT_SCALE);
    amount
}
