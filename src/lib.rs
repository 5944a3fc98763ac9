//! Seller performance report.
//!
//! Joins sellers, the product catalog and purchase records into one [`report::ReportRow`] per
//! seller: revenue, profit, number of sales, best selling products and a rank based bonus.
//! Revenue and bonus policies are injected through [`strategy::Strategies`].

pub mod engine;
pub mod money;
pub mod observer;
pub mod report;
pub mod sales;
pub mod seller_stats;
pub mod strategy;
