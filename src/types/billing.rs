//! Billing and affiliate types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use super::common::{materialize_opt, null_as_default, DateValue};
use crate::errors::{BunnyError, BunnyResult};
use crate::normalize::Normalize;

/// How a billing record was paid or charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingRecordType {
    /// Code 0.
    PayPal,
    /// Code 1.
    Bitcoin,
    /// Code 2.
    CreditCard,
    /// Code 3.
    MonthlyUsage,
    /// Code 4.
    Refund,
    /// Code 5.
    CouponCode,
    /// Code 6.
    BankTransfer,
    /// Code 7.
    AffiliateCredits,
}

impl BillingRecordType {
    /// Returns the label the API documents for this type.
    pub fn name(self) -> &'static str {
        match self {
            BillingRecordType::PayPal => "PayPal",
            BillingRecordType::Bitcoin => "Bitcoin",
            BillingRecordType::CreditCard => "CreditCard",
            BillingRecordType::MonthlyUsage => "MonthlyUsage",
            BillingRecordType::Refund => "Refund",
            BillingRecordType::CouponCode => "CouponCode",
            BillingRecordType::BankTransfer => "BankTransfer",
            BillingRecordType::AffiliateCredits => "AffiliateCredits",
        }
    }

    /// Returns the numeric code.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for BillingRecordType {
    type Error = BunnyError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => BillingRecordType::PayPal,
            1 => BillingRecordType::Bitcoin,
            2 => BillingRecordType::CreditCard,
            3 => BillingRecordType::MonthlyUsage,
            4 => BillingRecordType::Refund,
            5 => BillingRecordType::CouponCode,
            6 => BillingRecordType::BankTransfer,
            7 => BillingRecordType::AffiliateCredits,
            other => {
                return Err(BunnyError::parse(
                    "Type",
                    format!("invalid billing record type {}", other),
                ))
            }
        })
    }
}

impl fmt::Display for BillingRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Account balance, charges and payment history.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingDetails {
    /// Current balance in USD.
    #[serde(default, deserialize_with = "null_as_default")]
    pub balance: f64,
    /// Charges accrued this month.
    #[serde(default, deserialize_with = "null_as_default")]
    pub this_month_charges: f64,
    /// Payment and charge history.
    #[serde(default, deserialize_with = "null_as_default")]
    pub billing_records: Vec<BillingRecord>,
    /// Storage charges this month.
    #[serde(default)]
    pub monthly_charges_storage: Option<f64>,
    /// European traffic charges this month.
    #[serde(rename = "MonthlyChargesEUTraffic", default)]
    pub monthly_charges_eu_traffic: Option<f64>,
    /// North American traffic charges this month.
    #[serde(rename = "MonthlyChargesUSTraffic", default)]
    pub monthly_charges_us_traffic: Option<f64>,
    /// Asian and Oceanian traffic charges this month.
    #[serde(rename = "MonthlyChargesASIATraffic", default)]
    pub monthly_charges_asia_traffic: Option<f64>,
    /// African traffic charges this month.
    #[serde(rename = "MonthlyChargesAFTraffic", default)]
    pub monthly_charges_af_traffic: Option<f64>,
    /// South American traffic charges this month.
    #[serde(rename = "MonthlyChargesSATraffic", default)]
    pub monthly_charges_sa_traffic: Option<f64>,
    /// Daily charge history keyed by date.
    #[serde(default, deserialize_with = "null_as_default")]
    pub billing_history_chart: HashMap<String, f64>,
}

/// A single payment or charge.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingRecord {
    /// Record ID.
    pub id: u64,
    /// Payment provider reference.
    #[serde(default)]
    pub payment_id: Option<String>,
    /// Amount in USD.
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
    /// Payer name or address.
    #[serde(default)]
    pub payer: Option<String>,
    /// When the record was created.
    #[serde(default)]
    pub timestamp: Option<DateValue>,
    /// Whether an invoice can be downloaded.
    #[serde(default, deserialize_with = "null_as_default")]
    pub invoice_available: bool,
    /// Numeric record type, see [`BillingRecordType`].
    #[serde(rename = "Type", default)]
    pub record_type: Option<i32>,
    /// Label for `record_type`, attached by field population.
    #[serde(rename = "TypeName", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
}

impl BillingRecord {
    /// Decodes `record_type`, if present.
    pub fn kind(&self) -> Option<BunnyResult<BillingRecordType>> {
        self.record_type.map(BillingRecordType::try_from)
    }
}

impl Normalize for BillingRecord {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        materialize_opt(&mut self.timestamp, "Timestamp")
    }

    fn populate_fields(&mut self) -> BunnyResult<()> {
        if let Some(kind) = self.kind().transpose()? {
            self.type_name = Some(kind.name().to_string());
        }
        Ok(())
    }
}

impl Normalize for BillingDetails {
    fn materialize_dates(&mut self) -> BunnyResult<()> {
        self.billing_records.materialize_dates()
    }

    fn populate_fields(&mut self) -> BunnyResult<()> {
        self.billing_records.populate_fields()
    }
}

/// Affiliate program balance and statistics.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AffiliateDetails {
    /// Unclaimed affiliate credits in USD.
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliate_balance: f64,
    /// Referral URL.
    #[serde(default)]
    pub affiliate_url: Option<String>,
    /// Daily referral clicks keyed by date.
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliate_clicks_chart: HashMap<String, f64>,
    /// Daily referral signups keyed by date.
    #[serde(default, deserialize_with = "null_as_default")]
    pub affiliate_signups_chart: HashMap<String, f64>,
}

impl Normalize for AffiliateDetails {}

/// Monthly usage of one pull zone.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingSummaryItem {
    /// Pull zone ID.
    pub pull_zone_id: u64,
    /// Charges this month in USD.
    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_usage: f64,
    /// Bandwidth used this month in bytes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub monthly_bandwidth_used: u64,
}

impl Normalize for BillingSummaryItem {}
