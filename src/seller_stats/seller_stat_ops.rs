//! Free functions that mutate a supplied [`SellerStat`].
//!
//! The aggregation pass calls [`record_sale`] once per matched purchase record and
//! [`record_sold_item`] once per matched line item. The ranking pass then calls
//! [`assign_bonus`] and [`assign_top_products`] exactly once per seller.
//!
//! Every fallible operation computes all the new values first and assigns them only when all of
//! them succeeded, so a failed call leaves the [`SellerStat`] untouched.

use crate::money::Money;
use crate::sales::SellerId;
use crate::sales::Sku;
use crate::seller_stats::SellerStat;
use crate::seller_stats::TopProduct;

#[derive(thiserror::Error, Debug)]
pub enum SellerStatError {
    #[error("revenue overflow while adding {amount} to seller_id={seller_id}")]
    RevenueOverflow { seller_id: SellerId, amount: Money },
    #[error("profit overflow while adding {amount} to seller_id={seller_id}")]
    ProfitOverflow { seller_id: SellerId, amount: Money },
    #[error("sold quantity overflow while adding {quantity} of sku={sku} to seller_id={seller_id}")]
    QuantityOverflow {
        seller_id: SellerId,
        sku: Sku,
        quantity: u32,
    },
    #[error("sales count overflow for seller_id={seller_id}")]
    SalesCountOverflow { seller_id: SellerId },
}

/// Counts one more purchase record for the seller.
///
/// # Errors
///
/// Returns [`SellerStatError::SalesCountOverflow`] if the counter overflows.
pub fn record_sale(seller_stat: &mut SellerStat) -> Result<(), SellerStatError> {
    seller_stat.sales_count = seller_stat
        .sales_count
        .checked_add(1)
        .ok_or_else(|| SellerStatError::SalesCountOverflow {
            seller_id: seller_stat.seller_id.clone(),
        })?;
    Ok(())
}

/// Adds one line item to the seller's running totals: revenue and profit in minor units, and
/// `quantity` units to the tally of `sku`.
///
/// # Errors
///
/// Returns an error if:
/// - Adding `revenue` overflows ([`SellerStatError::RevenueOverflow`]).
/// - Adding `profit` overflows ([`SellerStatError::ProfitOverflow`]).
/// - Adding `quantity` to the SKU tally overflows ([`SellerStatError::QuantityOverflow`]).
pub fn record_sold_item(
    seller_stat: &mut SellerStat,
    sku: &Sku,
    quantity: u32,
    revenue: Money,
    profit: Money,
) -> Result<(), SellerStatError> {
    let new_revenue = seller_stat
        .revenue
        .checked_add(revenue)
        .ok_or_else(|| SellerStatError::RevenueOverflow {
            seller_id: seller_stat.seller_id.clone(),
            amount: revenue,
        })?;
    let new_profit = seller_stat
        .profit
        .checked_add(profit)
        .ok_or_else(|| SellerStatError::ProfitOverflow {
            seller_id: seller_stat.seller_id.clone(),
            amount: profit,
        })?;
    let sold = seller_stat.products_sold.get(sku).copied().unwrap_or_default();
    let new_sold = sold
        .checked_add(u64::from(quantity))
        .ok_or_else(|| SellerStatError::QuantityOverflow {
            seller_id: seller_stat.seller_id.clone(),
            sku: sku.clone(),
            quantity,
        })?;

    seller_stat.revenue = new_revenue;
    seller_stat.profit = new_profit;
    seller_stat.products_sold.insert(sku.clone(), new_sold);
    Ok(())
}

pub const fn assign_bonus(seller_stat: &mut SellerStat, bonus: Money) {
    seller_stat.bonus = bonus;
}

pub fn assign_top_products(seller_stat: &mut SellerStat, top_products: Vec<TopProduct>) {
    seller_stat.top_products = top_products;
}
