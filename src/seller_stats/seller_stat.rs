use indexmap::IndexMap;
use serde::Serialize;

use crate::money::Money;
use crate::sales::Seller;
use crate::sales::SellerId;
use crate::sales::Sku;

#[derive(Debug, Clone)]
pub struct SellerStat {
    pub(in crate::seller_stats) seller_id: SellerId,
    pub(in crate::seller_stats) name: String,
    pub(in crate::seller_stats) revenue: Money,
    pub(in crate::seller_stats) profit: Money,
    pub(in crate::seller_stats) sales_count: u64,
    pub(in crate::seller_stats) products_sold: IndexMap<Sku, u64>,
    pub(in crate::seller_stats) bonus: Money,
    pub(in crate::seller_stats) top_products: Vec<TopProduct>,
}

impl SellerStat {
    pub fn new(seller_id: SellerId, name: String) -> Self {
        Self {
            seller_id,
            name,
            revenue: Money::ZERO,
            profit: Money::ZERO,
            sales_count: 0,
            products_sold: IndexMap::new(),
            bonus: Money::ZERO,
            top_products: Vec::new(),
        }
    }

    pub const fn seller_id(&self) -> &SellerId {
        &self.seller_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn revenue(&self) -> Money {
        self.revenue
    }

    pub const fn profit(&self) -> Money {
        self.profit
    }

    pub const fn sales_count(&self) -> u64 {
        self.sales_count
    }

    /// Units sold per SKU, in order of first sale.
    pub const fn products_sold(&self) -> &IndexMap<Sku, u64> {
        &self.products_sold
    }

    pub const fn bonus(&self) -> Money {
        self.bonus
    }

    pub fn top_products(&self) -> &[TopProduct] {
        &self.top_products
    }
}

impl From<&Seller> for SellerStat {
    fn from(seller: &Seller) -> Self {
        Self::new(seller.id.clone(), seller.display_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, parse_display::Display)]
#[display("{sku}:{quantity}")]
pub struct TopProduct {
    pub sku: Sku,
    pub quantity: u64,
}
