use std::collections::HashMap;

use crate::domain::{HttpMethod, RequestResult};

/// Aggregated statistics for one (endpoint name, method) group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub name: String,
    pub method: HttpMethod,
    pub count: u64,
    /// Mean latency in hundredths of a millisecond, rounded half-up.
    pub avg_latency_x100: u64,
    pub success: u64,
    pub failed: u64,
}

impl SummaryRow {
    #[must_use]
    pub fn avg_latency_display(&self) -> String {
        format_latency_x100(self.avg_latency_x100)
    }
}

#[derive(Default)]
struct GroupAcc {
    count: u64,
    success: u64,
    latency_sum_ms: u128,
}

/// Groups results by (name, method) in first-seen order.
#[must_use]
pub fn summarize(results: &[RequestResult]) -> Vec<SummaryRow> {
    let mut order: Vec<(&str, HttpMethod)> = Vec::new();
    let mut groups: HashMap<(&str, HttpMethod), GroupAcc> = HashMap::new();

    for result in results {
        let key = (result.name.as_str(), result.method);
        let acc = groups.entry(key).or_insert_with(|| {
            order.push(key);
            GroupAcc::default()
        });
        acc.count = acc.count.saturating_add(1);
        if result.status.is_success() {
            acc.success = acc.success.saturating_add(1);
        }
        acc.latency_sum_ms = acc
            .latency_sum_ms
            .saturating_add(u128::from(result.latency_ms));
    }

    order
        .into_iter()
        .filter_map(|key| {
            let acc = groups.get(&key)?;
            Some(SummaryRow {
                name: key.0.to_owned(),
                method: key.1,
                count: acc.count,
                avg_latency_x100: mean_x100(acc.latency_sum_ms, acc.count),
                success: acc.success,
                failed: acc.count.saturating_sub(acc.success),
            })
        })
        .collect()
}

fn mean_x100(sum_ms: u128, count: u64) -> u64 {
    let count = u128::from(count);
    // (sum * 100 + count / 2) / count, rounding half-up.
    let scaled = sum_ms
        .saturating_mul(100)
        .saturating_add(count / 2)
        .checked_div(count)
        .unwrap_or(0);
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

/// Formats a ×100 fixed-point value with two decimals, e.g. `2000` -> `20.00`.
#[must_use]
pub fn format_latency_x100(value: u64) -> String {
    format!("{}.{:02}", value / 100, value % 100)
}
