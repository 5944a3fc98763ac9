use sales_report::observer::ReportObserver;
use sales_report::sales::PurchaseItem;
use sales_report::sales::PurchaseRecord;
use sales_report::seller_stats::SellerStat;

/// Forwards report generation events to `tracing`.
pub struct TracingObserver;

impl ReportObserver for TracingObserver {
    fn on_record_skipped(&self, record: &PurchaseRecord) {
        tracing::warn!(seller_id = %record.seller_id, "skipping purchase record of unknown seller");
    }

    fn on_item_skipped(&self, record: &PurchaseRecord, item: &PurchaseItem) {
        tracing::warn!(
            seller_id = %record.seller_id,
            sku = %item.sku,
            "skipping item of unknown product"
        );
    }

    fn on_seller_ranked(&self, rank: usize, total: usize, seller_stat: &SellerStat) {
        tracing::debug!(
            rank,
            total,
            seller_id = %seller_stat.seller_id(),
            profit = %seller_stat.profit(),
            bonus = %seller_stat.bonus(),
            "seller ranked"
        );
    }
}
