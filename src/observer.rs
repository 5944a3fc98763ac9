use crate::sales::PurchaseItem;
use crate::sales::PurchaseRecord;
use crate::seller_stats::SellerStat;

/// Optional hook notified while a report is generated.
///
/// The engine itself never logs. Skipped records and items are a tolerated data gap, not an
/// error, so they are only reported here for whoever wants to watch data quality.
pub trait ReportObserver {
    /// The record references a seller that is not in the input.
    fn on_record_skipped(&self, _record: &PurchaseRecord) {}

    /// The item references a SKU that is not in the product catalog.
    fn on_item_skipped(&self, _record: &PurchaseRecord, _item: &PurchaseItem) {}

    /// The seller has been ranked, its bonus and top products are assigned.
    fn on_seller_ranked(&self, _rank: usize, _total: usize, _seller_stat: &SellerStat) {}
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ReportObserver for NoopObserver {}

impl<T: ReportObserver + ?Sized> ReportObserver for &T {
    fn on_record_skipped(&self, record: &PurchaseRecord) {
        (**self).on_record_skipped(record);
    }

    fn on_item_skipped(&self, record: &PurchaseRecord, item: &PurchaseItem) {
        (**self).on_item_skipped(record, item);
    }

    fn on_seller_ranked(&self, rank: usize, total: usize, seller_stat: &SellerStat) {
        (**self).on_seller_ranked(rank, total, seller_stat);
    }
}
