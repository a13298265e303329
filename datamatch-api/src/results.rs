use once_cell::sync::Lazy;
use serde_json::{json, Value};

/// Placeholder analytics served for every run. The results page expects this
/// shape; nothing here is computed from the actual run.
static MOCK_RESULTS: Lazy<Value> = Lazy::new(|| {
    json!({
        "summary": {
            "total_records": 10000,
            "matched_records": 9856,
            "unmatched_records": 144,
            "match_rate": 98.56,
            "execution_time": "2m 34s",
        },
        "metrics": [
            { "name": "Match Rate", "value": 98.56, "unit": "%" },
            { "name": "Total Records", "value": 10000, "unit": "" },
            { "name": "Processing Time", "value": 154, "unit": "seconds" },
            { "name": "Memory Usage", "value": 245, "unit": "MB" },
        ],
        "chart_data": {
            "match_distribution": [
                { "category": "Perfect Match", "count": 8500 },
                { "category": "Fuzzy Match", "count": 1356 },
                { "category": "No Match", "count": 144 },
            ],
            "time_series": [
                { "timestamp": "2025-01-01", "matches": 856 },
                { "timestamp": "2025-01-02", "matches": 923 },
                { "timestamp": "2025-01-03", "matches": 1045 },
                { "timestamp": "2025-01-04", "matches": 987 },
                { "timestamp": "2025-01-05", "matches": 1123 },
            ],
        },
    })
});

pub fn mock_payload() -> &'static Value {
    &MOCK_RESULTS
}
