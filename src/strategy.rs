//! Caller-supplied policies plugged into the report engine.
//!
//! A [`RevenueStrategy`] prices a single purchased item, a [`BonusStrategy`] turns a seller's
//! rank into a bonus amount. Both return major-unit [`Decimal`]s: the engine converts them to
//! [`crate::money::Money`]. Both are implemented for plain closures with the matching
//! signature, so a one-off policy does not need a dedicated type.
//!
//! Strategy errors are never inspected by the engine, they reach the caller as-is.

use color_eyre::eyre::OptionExt as _;
use rust_decimal::Decimal;

use crate::sales::Product;
use crate::sales::PurchaseItem;
use crate::seller_stats::SellerStat;

pub trait RevenueStrategy {
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> color_eyre::Result<Decimal>;
}

impl<F> RevenueStrategy for F
where
    F: Fn(&PurchaseItem, &Product) -> color_eyre::Result<Decimal>,
{
    fn revenue(&self, item: &PurchaseItem, product: &Product) -> color_eyre::Result<Decimal> {
        self(item, product)
    }
}

pub trait BonusStrategy {
    /// `rank` is zero-based over `total` sellers sorted by descending profit.
    fn bonus(&self, rank: usize, total: usize, seller_stat: &SellerStat) -> color_eyre::Result<Decimal>;
}

impl<F> BonusStrategy for F
where
    F: Fn(usize, usize, &SellerStat) -> color_eyre::Result<Decimal>,
{
    fn bonus(&self, rank: usize, total: usize, seller_stat: &SellerStat) -> color_eyre::Result<Decimal> {
        self(rank, total, seller_stat)
    }
}

/// `sale_price * quantity * (1 - discount / 100)`.
///
/// Fails instead of overflowing when the product does not fit a [`Decimal`].
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleRevenue;

impl RevenueStrategy for SimpleRevenue {
    fn revenue(&self, item: &PurchaseItem, _product: &Product) -> color_eyre::Result<Decimal> {
        item.sale_price
            .as_inner()
            .checked_mul(Decimal::ONE - item.discount_rate())
            .and_then(|discounted_price| discounted_price.checked_mul(Decimal::from(item.quantity)))
            .ok_or_eyre(format!("revenue overflow for {item}"))
    }
}

/// Percentage of the seller's profit by rank:
/// first 15%, second and third 10%, last 0%, everybody else 5%.
///
/// The checks run in that order, so with one seller the only seller is first (15%), and with
/// two or three sellers the last one still falls in the 10% tier.
#[derive(Debug, Default, Clone, Copy)]
pub struct BonusByProfit;

impl BonusByProfit {
    const FIRST_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);
    const PODIUM_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);
    const BASE_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);

    pub const fn rate(rank: usize, total: usize) -> Decimal {
        if rank == 0 {
            Self::FIRST_RATE
        } else if rank == 1 || rank == 2 {
            Self::PODIUM_RATE
        } else if rank + 1 == total {
            Decimal::ZERO
        } else {
            Self::BASE_RATE
        }
    }
}

impl BonusStrategy for BonusByProfit {
    fn bonus(&self, rank: usize, total: usize, seller_stat: &SellerStat) -> color_eyre::Result<Decimal> {
        Ok(seller_stat.profit().to_major() * Self::rate(rank, total))
    }
}

/// The pair of policies a report is computed with.
#[derive(Debug, Clone, Copy)]
pub struct Strategies<R, B> {
    pub revenue: R,
    pub bonus: B,
}

impl<R, B> Strategies<R, B>
where
    R: RevenueStrategy,
    B: BonusStrategy,
{
    pub const fn new(revenue: R, bonus: B) -> Self {
        Self { revenue, bonus }
    }
}

impl Default for Strategies<SimpleRevenue, BonusByProfit> {
    fn default() -> Self {
        Self::new(SimpleRevenue, BonusByProfit)
    }
}
