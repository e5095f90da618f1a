//! Report payloads: reportingrest datasets and MambaETL flat reports.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::PmtctError;

/// Dataset definitions queried through `/ws/rest/v1/reportingrest/dataSet/{uuid}`.
///
/// The uuids belong to the deployment's report configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportDefinitions {
    pub anc_visits: String,
    pub edd: String,
    pub mother_hiv_status: String,
}

impl Default for ReportDefinitions {
    fn default() -> Self {
        Self {
            anc_visits: "77d0c3f4-4e52-4b9f-b6a8-ae7d6a3d2b4b".to_string(),
            edd: "a6c1b0d2-8f7e-4b0e-9c1a-3f4e5d6c7b8a".to_string(),
            mother_hiv_status: "0c3e4a9b-5d2f-4e61-8b7a-9f1d2c3b4a5e".to_string(),
        }
    }
}

/// Evaluated reportingrest dataset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<JsonValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<JsonValue>,

    #[serde(default)]
    pub rows: Vec<Map<String, JsonValue>>,
}

impl DataSet {
    /// Value of `column` in the first row
    pub fn first_value(&self, column: &str) -> Option<&JsonValue> {
        self.rows.first()?.get(column)
    }
}

/// Response of `/ws/rest/v1/mamba/report`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MambaReport {
    #[serde(default)]
    pub results: Vec<MambaResult>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MambaResult {
    #[serde(default)]
    pub record: Vec<MambaRecordItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MambaRecordItem {
    pub column: String,

    #[serde(default)]
    pub value: JsonValue,
}

impl MambaReport {
    /// Count stored under `column` in the first result.
    ///
    /// A report with no results, or whose first record lacks the column,
    /// counts as zero. Negative values (`"-4"`) are rejected as
    /// [`PmtctError::InvalidReportValue`] rather than passed through.
    pub fn count(&self, column: &str) -> Result<u64, PmtctError> {
        let Some(result) = self.results.first() else {
            return Ok(0);
        };

        match result.record.iter().find(|item| item.column == column) {
            Some(item) => count_value(column, &item.value),
            None => Ok(0),
        }
    }
}

fn count_value(column: &str, value: &JsonValue) -> Result<u64, PmtctError> {
    let parsed = match value {
        JsonValue::String(s) => parse_leading_int(s).and_then(|n| u64::try_from(n).ok()),
        JsonValue::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(|f| f.trunc() as u64)
        }),
        _ => None,
    };

    parsed.ok_or_else(|| PmtctError::InvalidReportValue {
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Parse the leading decimal integer of `s`.
///
/// Leading whitespace and a sign are accepted; parsing stops at the first
/// non-digit. Returns `None` when no digit follows, or on overflow.
pub fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// PMTCT dashboard indicators served by MambaETL reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardIndicator {
    /// Pregnant women attending their first ANC visit
    TotalPregnantWomen,
    /// Unique women who delivered since the start of the fiscal year
    TotalDeliveries,
    /// HIV-exposed children enrolled in follow-up care
    HivExposedInfants,
}

impl DashboardIndicator {
    pub const ALL: [DashboardIndicator; 3] = [
        DashboardIndicator::TotalPregnantWomen,
        DashboardIndicator::TotalDeliveries,
        DashboardIndicator::HivExposedInfants,
    ];

    pub fn report_id(self) -> &'static str {
        match self {
            DashboardIndicator::TotalPregnantWomen => "total_pregnant_women",
            DashboardIndicator::TotalDeliveries => "total_deliveries",
            DashboardIndicator::HivExposedInfants => "hiv_exposed_infants",
        }
    }

    /// Column holding the count in the report record
    pub fn column(self) -> &'static str {
        match self {
            DashboardIndicator::TotalPregnantWomen => "total_pregnant_women",
            DashboardIndicator::TotalDeliveries => "total_deliveries",
            DashboardIndicator::HivExposedInfants => "total_hiv_exposed_infants",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DashboardIndicator::TotalPregnantWomen => "Pregnant women attending first ANC",
            DashboardIndicator::TotalDeliveries => "Deliveries this fiscal year",
            DashboardIndicator::HivExposedInfants => "HIV-exposed infants in follow-up",
        }
    }
}

/// The three dashboard counts together
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_pregnant_women: u64,
    pub total_deliveries: u64,
    pub hiv_exposed_infants: u64,
}
