use indexmap::IndexMap;

use crate::sales::SellerId;

pub mod seller_stat;
pub mod seller_stat_ops;

pub use seller_stat::SellerStat;
pub use seller_stat::TopProduct;
pub use seller_stat_ops::SellerStatError;
pub use seller_stat_ops::assign_bonus;
pub use seller_stat_ops::assign_top_products;
pub use seller_stat_ops::record_sale;
pub use seller_stat_ops::record_sold_item;

/// One [`SellerStat`] per seller, iterated in the order sellers were supplied.
#[derive(Debug, Default)]
pub struct SellerStats(IndexMap<SellerId, SellerStat>);

impl SellerStats {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    pub fn contains(&self, seller_id: &SellerId) -> bool {
        self.0.contains_key(seller_id)
    }

    pub fn insert(&mut self, seller_stat: SellerStat) {
        self.0.insert(seller_stat.seller_id().clone(), seller_stat);
    }

    pub fn get_mut(&mut self, seller_id: &SellerId) -> Option<&mut SellerStat> {
        self.0.get_mut(seller_id)
    }

    pub fn as_inner(&self) -> &IndexMap<SellerId, SellerStat> {
        &self.0
    }

    pub fn into_vec(self) -> Vec<SellerStat> {
        self.0.into_values().collect()
    }
}
