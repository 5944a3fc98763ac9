use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::engine::TOP_PRODUCTS_LIMIT;
use crate::engine::index::SalesIndex;
use crate::engine::index::ValidationError;
use crate::engine::ranking;
use crate::money::Money;
use crate::money::MoneyError;
use crate::observer::NoopObserver;
use crate::observer::ReportObserver;
use crate::report::ReportRow;
use crate::sales::Product;
use crate::sales::PurchaseRecord;
use crate::sales::SalesData;
use crate::sales::Sku;
use crate::seller_stats;
use crate::seller_stats::SellerStatError;
use crate::seller_stats::SellerStats;
use crate::strategy::BonusStrategy;
use crate::strategy::RevenueStrategy;
use crate::strategy::Strategies;

#[cfg(test)]
#[path = "tests/report_engine_tests.rs"]
mod report_engine_tests;

/// Generates the seller report with the supplied strategies and no observer.
///
/// # Errors
///
/// See [`ReportEngine::generate`].
pub fn generate_report<R, B>(
    sales_data: &SalesData,
    strategies: Strategies<R, B>,
) -> Result<Vec<ReportRow>, ReportEngineError>
where
    R: RevenueStrategy,
    B: BonusStrategy,
{
    ReportEngine::new(strategies).generate(sales_data)
}

pub struct ReportEngine<R, B, O = NoopObserver> {
    strategies: Strategies<R, B>,
    observer: O,
}

impl<R, B> ReportEngine<R, B>
where
    R: RevenueStrategy,
    B: BonusStrategy,
{
    pub const fn new(strategies: Strategies<R, B>) -> Self {
        Self {
            strategies,
            observer: NoopObserver,
        }
    }
}

impl<R, B, O> ReportEngine<R, B, O>
where
    R: RevenueStrategy,
    B: BonusStrategy,
    O: ReportObserver,
{
    pub fn with_observer<P: ReportObserver>(self, observer: P) -> ReportEngine<R, B, P> {
        ReportEngine {
            strategies: self.strategies,
            observer,
        }
    }

    /// Aggregates every purchase record, ranks the sellers by profit and returns one
    /// [`ReportRow`] per seller, most profitable first.
    ///
    /// Records of unknown sellers and items of unknown SKUs are skipped, only the observer
    /// hears about them.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input is invalid ([`ReportEngineError::Validation`]), checked before any aggregation.
    /// - A strategy fails ([`ReportEngineError::Strategy`]), the strategy error is returned as-is.
    /// - An amount or a running total does not fit its representation ([`ReportEngineError::Money`],
    ///   [`ReportEngineError::SellerStat`], [`ReportEngineError::ItemOverflow`]).
    pub fn generate(&self, sales_data: &SalesData) -> Result<Vec<ReportRow>, ReportEngineError> {
        let SalesIndex {
            mut seller_stats,
            products,
        } = SalesIndex::build(sales_data)?;

        for record in &sales_data.purchase_records {
            self.aggregate_record(&mut seller_stats, &products, record)?;
        }

        let mut ranked = ranking::rank_by_profit(seller_stats);
        let total = ranked.len();
        for (rank, seller_stat) in ranked.iter_mut().enumerate() {
            let bonus = self
                .strategies
                .bonus
                .bonus(rank, total, seller_stat)
                .map_err(ReportEngineError::Strategy)?;
            seller_stats::assign_bonus(seller_stat, Money::from_major(bonus)?);

            let top_products = ranking::top_products(seller_stat.products_sold(), TOP_PRODUCTS_LIMIT);
            seller_stats::assign_top_products(seller_stat, top_products);

            self.observer.on_seller_ranked(rank, total, seller_stat);
        }

        Ok(ranked.iter().map(ReportRow::from).collect())
    }

    fn aggregate_record(
        &self,
        seller_stats: &mut SellerStats,
        products: &HashMap<&Sku, &Product>,
        record: &PurchaseRecord,
    ) -> Result<(), ReportEngineError> {
        let Some(seller_stat) = seller_stats.get_mut(&record.seller_id) else {
            self.observer.on_record_skipped(record);
            return Ok(());
        };

        seller_stats::record_sale(seller_stat)?;

        for item in &record.items {
            let Some(&product) = products.get(&item.sku) else {
                self.observer.on_item_skipped(record, item);
                continue;
            };

            let revenue = self
                .strategies
                .revenue
                .revenue(item, product)
                .map_err(ReportEngineError::Strategy)?;
            let cost = product
                .purchase_price
                .as_inner()
                .checked_mul(Decimal::from(item.quantity))
                .ok_or_else(|| item_overflow_error(&item.sku, item.quantity))?;

            let revenue = Money::from_major(revenue)?;
            let cost = Money::from_major(cost)?;
            let profit = revenue
                .checked_sub(cost)
                .ok_or_else(|| item_overflow_error(&item.sku, item.quantity))?;

            seller_stats::record_sold_item(seller_stat, &item.sku, item.quantity, revenue, profit)?;
        }

        Ok(())
    }
}

fn item_overflow_error(sku: &Sku, quantity: u32) -> ReportEngineError {
    ReportEngineError::ItemOverflow {
        sku: sku.clone(),
        quantity,
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ReportEngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("strategy failed error={0:#}")]
    Strategy(color_eyre::Report),
    #[error("overflow while pricing item sku={sku} quantity={quantity}")]
    ItemOverflow { sku: Sku, quantity: u32 },
    #[error(transparent)]
    Money(#[from] MoneyError),
    #[error(transparent)]
    SellerStat(#[from] SellerStatError),
}
