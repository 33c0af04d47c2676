use serde::Deserialize;

fn zero_mb() -> String {
    "0".to_string()
}

/// Account quota counters. The server omits fields that are zero, so every
/// field carries a default.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageResponse {
    #[serde(default)]
    pub api_count_day: i64,
    #[serde(default)]
    pub api_count_day_limit: i64,
    #[serde(default)]
    pub api_count_month: i64,
    #[serde(default)]
    pub api_count_month_limit: i64,
    #[serde(default)]
    pub link_count_day: i64,
    #[serde(default)]
    pub link_count_day_limit: i64,
    #[serde(default)]
    pub link_count_month: i64,
    #[serde(default)]
    pub link_count_month_limit: i64,
    #[serde(default)]
    pub qrcode_count_day: i64,
    #[serde(default)]
    pub qrcode_count_day_limit: i64,
    #[serde(default)]
    pub qrcode_count_month: i64,
    #[serde(default)]
    pub qrcode_count_month_limit: i64,
    #[serde(default)]
    pub text_count_day: i64,
    #[serde(default)]
    pub text_count_day_limit: i64,
    #[serde(default)]
    pub text_count_month: i64,
    #[serde(default)]
    pub text_count_month_limit: i64,
    #[serde(default)]
    pub upload_count_day: i64,
    #[serde(default)]
    pub upload_count_day_limit: i64,
    #[serde(default)]
    pub upload_count_month: i64,
    #[serde(default)]
    pub upload_count_month_limit: i64,
    #[serde(default)]
    pub file_count: i64,
    #[serde(default = "zero_mb")]
    pub storage_usage_mb: String,
    #[serde(default = "zero_mb")]
    pub storage_usage_limit_mb: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_payloads_fill_in_defaults() {
        let usage: UsageResponse =
            serde_json::from_str(r#"{"link_count_day":3,"storage_usage_mb":"12.5"}"#).unwrap();
        assert_eq!(usage.link_count_day, 3);
        assert_eq!(usage.api_count_day, 0);
        assert_eq!(usage.storage_usage_mb, "12.5");
        assert_eq!(usage.storage_usage_limit_mb, "0");
    }
}
