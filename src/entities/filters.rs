//! Dashboard filter inputs

use crate::core::error::ParseValueError;
use crate::entities::order::Channel;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting period selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Period {
    #[serde(rename = "7d")]
    Last7Days,
    #[default]
    #[serde(rename = "30d")]
    Last30Days,
    #[serde(rename = "QTD")]
    QuarterToDate,
    #[serde(rename = "YTD")]
    YearToDate,
    #[serde(rename = "custom")]
    Custom,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Last7Days => "7d",
            Period::Last30Days => "30d",
            Period::QuarterToDate => "QTD",
            Period::YearToDate => "YTD",
            Period::Custom => "custom",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ParseValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(Period::Last7Days),
            "30d" => Ok(Period::Last30Days),
            "QTD" => Ok(Period::QuarterToDate),
            "YTD" => Ok(Period::YearToDate),
            "custom" => Ok(Period::Custom),
            other => Err(ParseValueError::new(
                "report period",
                other,
                "7d, 30d, QTD, YTD, custom",
            )),
        }
    }
}

/// Filters accepted by the dashboard summary
///
/// Channel and city narrow the order set. The period selector and the
/// custom date range are carried along for the UI but do not narrow the
/// data yet; see `MetricsService::summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DashboardFilters {
    /// Reporting period, defaults to the last 30 days
    pub period: Period,

    /// Start of a custom date range
    pub start_date: Option<NaiveDate>,

    /// End of a custom date range
    pub end_date: Option<NaiveDate>,

    /// Only count orders from this channel
    pub channel: Option<Channel>,

    /// Only count orders delivered to this city
    pub city: Option<String>,
}

impl DashboardFilters {
    /// Filters for one sales channel
    pub fn channel(channel: Channel) -> Self {
        Self {
            channel: Some(channel),
            ..Self::default()
        }
    }

    /// Filters for one delivery city
    pub fn city(city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_period_is_last_30_days() {
        assert_eq!(Period::default(), Period::Last30Days);
        assert_eq!(DashboardFilters::default().period, Period::Last30Days);
    }

    #[test]
    fn test_period_parse_roundtrip() {
        for period in [
            Period::Last7Days,
            Period::Last30Days,
            Period::QuarterToDate,
            Period::YearToDate,
            Period::Custom,
        ] {
            let parsed: Period = period.as_str().parse().unwrap();
            assert_eq!(parsed, period);
        }
    }

    #[test]
    fn test_period_parse_unknown() {
        let err = "90d".parse::<Period>().unwrap_err();
        assert!(err.to_string().contains("report period"));
    }

    #[test]
    fn test_period_serde_uses_short_names() {
        let json = serde_json::to_string(&Period::QuarterToDate).unwrap();
        assert_eq!(json, "\"QTD\"");
        let parsed: Period = serde_json::from_str("\"7d\"").unwrap();
        assert_eq!(parsed, Period::Last7Days);
    }

    #[test]
    fn test_filters_deserialize_with_defaults() {
        let filters: DashboardFilters = serde_json::from_str("{}").unwrap();
        assert_eq!(filters, DashboardFilters::default());

        let filters: DashboardFilters =
            serde_json::from_str(r#"{"period":"YTD","city":"Астана"}"#).unwrap();
        assert_eq!(filters.period, Period::YearToDate);
        assert_eq!(filters.city.as_deref(), Some("Астана"));
        assert!(filters.channel.is_none());
    }

    #[test]
    fn test_filter_shorthands() {
        assert_eq!(
            DashboardFilters::channel(Channel::Web).channel,
            Some(Channel::Web)
        );
        assert_eq!(
            DashboardFilters::city("Алматы").city.as_deref(),
            Some("Алматы")
        );
    }
}
