use std::cmp::Reverse;

use indexmap::IndexMap;

use crate::sales::Sku;
use crate::seller_stats::SellerStat;
use crate::seller_stats::SellerStats;
use crate::seller_stats::TopProduct;

/// Maximum number of entries in a seller's top products.
pub const TOP_PRODUCTS_LIMIT: usize = 10;

/// Sorts sellers by descending profit.
///
/// The sort is stable: sellers with equal profit keep the order in which they were supplied.
pub fn rank_by_profit(seller_stats: SellerStats) -> Vec<SellerStat> {
    let mut ranked = seller_stats.into_vec();
    ranked.sort_by_key(|seller_stat| Reverse(seller_stat.profit()));
    ranked
}

/// Returns at most `limit` SKUs by descending sold quantity.
///
/// SKUs with equal quantity keep the order of their first sale.
pub fn top_products(products_sold: &IndexMap<Sku, u64>, limit: usize) -> Vec<TopProduct> {
    let mut top_products: Vec<TopProduct> = products_sold
        .iter()
        .map(|(sku, quantity)| TopProduct {
            sku: sku.clone(),
            quantity: *quantity,
        })
        .collect();
    top_products.sort_by_key(|top_product| Reverse(top_product.quantity));
    top_products.truncate(limit);
    top_products
}
