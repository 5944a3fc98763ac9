use color_eyre::eyre::bail;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

#[derive(Debug, Serialize, Deserialize, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
#[display("{0}")]
#[serde(transparent)]
pub struct SellerId(pub String);

impl SellerId {
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Hash, PartialEq, Eq, Ord, PartialOrd, parse_display::Display)]
#[display("{0}")]
#[serde(transparent)]
pub struct Sku(pub String);

impl Sku {
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

#[derive(Debug, Clone, Deserialize, parse_display::Display)]
#[display("seller=(id={id} name={first_name} {last_name})")]
#[cfg_attr(test, derive(PartialEq))]
pub struct Seller {
    pub id: SellerId,
    pub first_name: String,
    pub last_name: String,
}

impl Seller {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Catalog entry. Only `sku` and `purchase_price` take part in the report, every other
/// field of the catalog record is kept as-is in `catalog`.
#[derive(Debug, Clone, Deserialize, parse_display::Display)]
#[display("product=(sku={sku} purchase_price={purchase_price})")]
#[cfg_attr(test, derive(PartialEq))]
pub struct Product {
    pub sku: Sku,
    pub purchase_price: NonNegativeAmount,
    #[serde(flatten)]
    pub catalog: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize, parse_display::Display)]
#[display("item=(sku={sku} quantity={quantity} sale_price={sale_price})")]
#[cfg_attr(test, derive(PartialEq))]
pub struct PurchaseItem {
    pub sku: Sku,
    pub quantity: u32,
    pub sale_price: NonNegativeAmount,
    #[serde(default)]
    pub discount: Option<Percentage>,
}

impl PurchaseItem {
    /// Discount as a fraction in `[0, 1]`, absent discount counts as none.
    pub fn discount_rate(&self) -> Decimal {
        self.discount.map_or(Decimal::ZERO, |discount| discount.as_fraction())
    }
}

/// A receipt. `total_amount` is carried along from the source data but the report derives
/// revenue from the single items.
#[derive(Debug, Clone, Deserialize, parse_display::Display)]
#[display("record=(seller_id={seller_id} total_amount={total_amount})")]
#[cfg_attr(test, derive(PartialEq))]
pub struct PurchaseRecord {
    pub seller_id: SellerId,
    #[serde(default)]
    pub total_amount: Decimal,
    pub items: Vec<PurchaseItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesData {
    pub sellers: Vec<Seller>,
    pub products: Vec<Product>,
    pub purchase_records: Vec<PurchaseRecord>,
}

/// This permits to avoid checks on negative prices while aggregating.
#[derive(Debug, Copy, Clone, parse_display::Display)]
#[display("{0}")]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct NonNegativeAmount(Decimal);

impl TryFrom<Decimal> for NonNegativeAmount {
    type Error = color_eyre::Report;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value.is_sign_negative() && !value.is_zero() {
            bail!("amount must not be negative value={value:?}");
        }
        Ok(Self(value))
    }
}

impl NonNegativeAmount {
    pub const fn as_inner(&self) -> Decimal {
        self.0
    }
}

impl<'de> Deserialize<'de> for NonNegativeAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let decimal = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(decimal).map_err(|error| serde::de::Error::custom(error.to_string()))
    }
}

/// Percentage in the inclusive range `[0, 100]`.
#[derive(Debug, Copy, Clone, parse_display::Display)]
#[display("{0}%")]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub struct Percentage(Decimal);

impl TryFrom<Decimal> for Percentage {
    type Error = color_eyre::Report;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            bail!("percentage must be within [0, 100] value={value:?}");
        }
        Ok(Self(value))
    }
}

impl Percentage {
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let decimal = <Decimal as serde::Deserialize>::deserialize(deserializer)?;
        Self::try_from(decimal).map_err(|error| serde::de::Error::custom(error.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    use super::*;

    #[rstest]
    #[case(
        r#"{"sku": "SKU_001", "quantity": 3, "sale_price": 12.5, "discount": 10}"#,
        PurchaseItem {
            sku: Sku("SKU_001".into()),
            quantity: 3,
            sale_price: NonNegativeAmount(dec!(12.5)),
            discount: Some(Percentage(dec!(10))),
        }
    )]
    #[case(
        r#"{"sku": "SKU_002", "quantity": 1, "sale_price": 4}"#,
        PurchaseItem {
            sku: Sku("SKU_002".into()),
            quantity: 1,
            sale_price: NonNegativeAmount(dec!(4)),
            discount: None,
        }
    )]
    #[case(
        r#"{"sku": "SKU_003", "quantity": 0, "sale_price": 0, "discount": null}"#,
        PurchaseItem {
            sku: Sku("SKU_003".into()),
            quantity: 0,
            sale_price: NonNegativeAmount(dec!(0)),
            discount: None,
        }
    )]
    fn deserialize_purchase_item_returns_the_expected_item(#[case] json: &str, #[case] expected: PurchaseItem) {
        assert2::let_assert!(Ok(item) = serde_json::from_str::<PurchaseItem>(json));
        assert_eq!(expected, item);
    }

    #[rstest]
    #[case(r#"{"sku": "p", "quantity": 1, "sale_price": -1}"#, "amount must not be negative")]
    #[case(r#"{"sku": "p", "quantity": 1, "sale_price": 1, "discount": 101}"#, "percentage must be within [0, 100]")]
    #[case(r#"{"sku": "p", "quantity": 1, "sale_price": 1, "discount": -0.5}"#, "percentage must be within [0, 100]")]
    #[case(r#"{"sku": "p", "quantity": -2, "sale_price": 1}"#, "invalid value")]
    #[case(r#"{"quantity": 1, "sale_price": 1}"#, "missing field `sku`")]
    fn deserialize_purchase_item_returns_the_expected_error(#[case] json: &str, #[case] expected_substr: &str) {
        assert2::let_assert!(Err(error) = serde_json::from_str::<PurchaseItem>(json));
        assert!(
            error.to_string().contains(expected_substr),
            "error={error:?} does not contain expected={expected_substr}'",
        );
    }

    #[test]
    fn deserialize_product_keeps_extra_catalog_fields() {
        let json = r#"{"sku": "SKU_010", "purchase_price": 7.25, "name": "Mug", "category": "Kitchen"}"#;
        assert2::let_assert!(Ok(product) = serde_json::from_str::<Product>(json));
        assert_eq!(product.sku, Sku("SKU_010".into()));
        assert_eq!(product.purchase_price.as_inner(), dec!(7.25));
        assert_eq!(product.catalog.get("name"), Some(&serde_json::json!("Mug")));
        assert_eq!(product.catalog.get("category"), Some(&serde_json::json!("Kitchen")));
    }

    #[test]
    fn deserialize_purchase_record_defaults_missing_total_amount() {
        let json = r#"{"seller_id": "seller_1", "items": []}"#;
        assert2::let_assert!(Ok(record) = serde_json::from_str::<PurchaseRecord>(json));
        assert_eq!(record.seller_id, SellerId("seller_1".into()));
        assert_eq!(record.total_amount, Decimal::ZERO);
        assert!(record.items.is_empty());
    }

    #[test]
    fn seller_display_name_joins_first_and_last_name() {
        let seller = Seller {
            id: SellerId("s1".into()),
            first_name: "Alexey".into(),
            last_name: "Petrov".into(),
        };
        assert_eq!(seller.display_name(), "Alexey Petrov");
    }

    #[rstest]
    #[case(None, dec!(0))]
    #[case(Some(dec!(0)), dec!(0))]
    #[case(Some(dec!(25)), dec!(0.25))]
    #[case(Some(dec!(100)), dec!(1))]
    fn discount_rate_converts_percentage_to_fraction(#[case] discount: Option<Decimal>, #[case] expected: Decimal) {
        let item = PurchaseItem {
            sku: Sku("p".into()),
            quantity: 1,
            sale_price: NonNegativeAmount(dec!(1)),
            discount: discount.map(Percentage),
        };
        assert_eq!(item.discount_rate(), expected);
    }
}
