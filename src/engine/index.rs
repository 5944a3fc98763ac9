use std::collections::HashMap;

use crate::sales::Product;
use crate::sales::SalesData;
use crate::sales::SellerId;
use crate::sales::Sku;
use crate::seller_stats::SellerStat;
use crate::seller_stats::SellerStats;

/// Lookup structures for the aggregation pass: a fresh [`SellerStat`] per seller and the
/// product catalog keyed by SKU.
#[derive(Debug)]
pub struct SalesIndex<'a> {
    pub(in crate::engine) seller_stats: SellerStats,
    pub(in crate::engine) products: HashMap<&'a Sku, &'a Product>,
}

impl<'a> SalesIndex<'a> {
    /// Validates `sales_data` and builds the indices. Nothing is built if any check fails.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Any of sellers, products or purchase records is empty.
    /// - A seller has a blank id or a product has a blank SKU.
    /// - Two sellers share an id or two products share a SKU.
    pub fn build(sales_data: &'a SalesData) -> Result<Self, ValidationError> {
        if sales_data.sellers.is_empty() {
            return Err(ValidationError::NoSellers);
        }
        if sales_data.products.is_empty() {
            return Err(ValidationError::NoProducts);
        }
        if sales_data.purchase_records.is_empty() {
            return Err(ValidationError::NoPurchaseRecords);
        }

        let mut seller_stats = SellerStats::with_capacity(sales_data.sellers.len());
        for (position, seller) in sales_data.sellers.iter().enumerate() {
            if seller.id.is_blank() {
                return Err(ValidationError::MissingSellerId { position });
            }
            if seller_stats.contains(&seller.id) {
                return Err(ValidationError::DuplicateSellerId {
                    seller_id: seller.id.clone(),
                });
            }
            seller_stats.insert(SellerStat::from(seller));
        }

        let mut products = HashMap::with_capacity(sales_data.products.len());
        for (position, product) in sales_data.products.iter().enumerate() {
            if product.sku.is_blank() {
                return Err(ValidationError::MissingSku { position });
            }
            if products.insert(&product.sku, product).is_some() {
                return Err(ValidationError::DuplicateSku {
                    sku: product.sku.clone(),
                });
            }
        }

        Ok(Self { seller_stats, products })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("empty or missing sellers")]
    NoSellers,
    #[error("empty or missing products")]
    NoProducts,
    #[error("empty or missing purchase records")]
    NoPurchaseRecords,
    #[error("seller without id position={position}")]
    MissingSellerId { position: usize },
    #[error("product without sku position={position}")]
    MissingSku { position: usize },
    #[error("duplicate seller seller_id={seller_id}")]
    DuplicateSellerId { seller_id: SellerId },
    #[error("duplicate product sku={sku}")]
    DuplicateSku { sku: Sku },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::money::Money;
    use crate::sales::NonNegativeAmount;
    use crate::sales::PurchaseRecord;
    use crate::sales::Seller;

    #[test]
    fn build_creates_one_fresh_stat_per_seller_in_input_order() {
        let sales_data = sales_data(&["s2", "s1", "s3"], &["p1", "p2"]);
        assert2::let_assert!(Ok(index) = SalesIndex::build(&sales_data));

        let ids: Vec<&str> = index
            .seller_stats
            .as_inner()
            .keys()
            .map(|seller_id| seller_id.0.as_str())
            .collect();
        assert_eq!(ids, vec!["s2", "s1", "s3"]);
        for seller_stat in index.seller_stats.as_inner().values() {
            assert_eq!(seller_stat.revenue(), Money::ZERO);
            assert_eq!(seller_stat.profit(), Money::ZERO);
            assert_eq!(seller_stat.sales_count(), 0);
            assert!(seller_stat.products_sold().is_empty());
        }
        assert_eq!(index.products.len(), 2);
        assert!(index.products.contains_key(&Sku("p2".into())));
    }

    #[test]
    fn build_computes_the_seller_display_name() {
        let sales_data = sales_data(&["s1"], &["p1"]);
        assert2::let_assert!(Ok(index) = SalesIndex::build(&sales_data));
        let seller_stat = &index.seller_stats.as_inner()[&SellerId("s1".into())];
        assert_eq!(seller_stat.name(), "First-s1 Last-s1");
    }

    #[test]
    fn build_without_sellers_errors() {
        let sales_data = sales_data(&[], &["p1"]);
        assert2::let_assert!(Err(ValidationError::NoSellers) = SalesIndex::build(&sales_data));
    }

    #[test]
    fn build_without_products_errors() {
        let sales_data = sales_data(&["s1"], &[]);
        assert2::let_assert!(Err(ValidationError::NoProducts) = SalesIndex::build(&sales_data));
    }

    #[test]
    fn build_without_purchase_records_errors() {
        let mut sales_data = sales_data(&["s1"], &["p1"]);
        sales_data.purchase_records.clear();
        assert2::let_assert!(Err(ValidationError::NoPurchaseRecords) = SalesIndex::build(&sales_data));
    }

    #[test]
    fn build_with_blank_seller_id_errors() {
        let sales_data = sales_data(&["s1", " "], &["p1"]);
        assert2::let_assert!(Err(ValidationError::MissingSellerId { position }) = SalesIndex::build(&sales_data));
        assert_eq!(position, 1);
    }

    #[test]
    fn build_with_blank_sku_errors() {
        let sales_data = sales_data(&["s1"], &["", "p1"]);
        assert2::let_assert!(Err(ValidationError::MissingSku { position }) = SalesIndex::build(&sales_data));
        assert_eq!(position, 0);
    }

    #[test]
    fn build_with_duplicate_seller_id_errors() {
        let sales_data = sales_data(&["s1", "s2", "s1"], &["p1"]);
        assert2::let_assert!(Err(ValidationError::DuplicateSellerId { seller_id }) = SalesIndex::build(&sales_data));
        assert_eq!(seller_id, SellerId("s1".into()));
    }

    #[test]
    fn build_with_duplicate_sku_errors() {
        let sales_data = sales_data(&["s1"], &["p1", "p1"]);
        assert2::let_assert!(Err(ValidationError::DuplicateSku { sku }) = SalesIndex::build(&sales_data));
        assert_eq!(sku, Sku("p1".into()));
    }

    fn sales_data(seller_ids: &[&str], skus: &[&str]) -> SalesData {
        SalesData {
            sellers: seller_ids
                .iter()
                .map(|id| Seller {
                    id: SellerId((*id).into()),
                    first_name: format!("First-{id}"),
                    last_name: format!("Last-{id}"),
                })
                .collect(),
            products: skus
                .iter()
                .map(|sku| Product {
                    sku: Sku((*sku).into()),
                    purchase_price: NonNegativeAmount::try_from(dec!(1)).unwrap(),
                    catalog: serde_json::Map::new(),
                })
                .collect(),
            purchase_records: vec![PurchaseRecord {
                seller_id: SellerId("s1".into()),
                total_amount: dec!(0),
                items: Vec::new(),
            }],
        }
    }
}
