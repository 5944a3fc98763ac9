use csv::Writer;
use rust_decimal::Decimal;
use sales_report::report::ReportRow;
use sales_report::sales::SellerId;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CsvReportError {
    #[error("csv serialization error for seller_id={seller_id}, source_error={source:?}")]
    Csv {
        seller_id: SellerId,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Writes the supplied [`ReportRow`]s to stdout as CSV, in the given order.
///
/// `top_products` is flattened into a single column of `sku:quantity` pairs separated by `;`.
pub fn write_to_stdout(rows: &[ReportRow]) -> Result<(), CsvReportError> {
    write(std::io::stdout().lock(), rows)
}

pub fn write<W: std::io::Write>(output: W, rows: &[ReportRow]) -> Result<(), CsvReportError> {
    let mut writer = Writer::from_writer(output);
    for row in rows {
        writer
            .serialize(CsvReportRow::from(row))
            .map_err(|source| CsvReportError::Csv {
                seller_id: row.seller_id.clone(),
                source,
            })?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct CsvReportRow<'a> {
    seller_id: &'a SellerId,
    name: &'a str,
    #[serde(with = "rust_decimal::serde::str")]
    revenue: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    profit: Decimal,
    sales_count: u64,
    top_products: String,
    #[serde(with = "rust_decimal::serde::str")]
    bonus: Decimal,
}

impl<'a> From<&'a ReportRow> for CsvReportRow<'a> {
    fn from(row: &'a ReportRow) -> Self {
        Self {
            seller_id: &row.seller_id,
            name: &row.name,
            revenue: row.revenue,
            profit: row.profit,
            sales_count: row.sales_count,
            top_products: row
                .top_products
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(";"),
            bonus: row.bonus,
        }
    }
}
