pub const SECONDS_PER_MINUTE: u64 = 60;
pub const SECONDS_PER_HOUR: u64 = 3_600;
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const SECONDS_PER_WEEK: u64 = 604_800;
/// 30 day month
pub const SECONDS_PER_MONTH: u64 = 2_592_000;
/// 365 day year
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

const UNITS: [(u64, &str); 7] = [
    (SECONDS_PER_YEAR, "year"),
    (SECONDS_PER_MONTH, "month"),
    (SECONDS_PER_WEEK, "week"),
    (SECONDS_PER_DAY, "day"),
    (SECONDS_PER_HOUR, "hour"),
    (SECONDS_PER_MINUTE, "minute"),
    (1, "second"),
];

/// Human readable spans of seconds.
pub struct Duration;

impl Duration {
    /// 3661 -> "1 hour, 1 minute, 1 second"
    pub fn humanize(seconds: u64) -> String {
        if seconds == 0 {
            return "0 seconds".to_string();
        }

        Self::components(seconds)
            .into_iter()
            .map(|(count, unit)| format!("{} {}{}", count, unit, if count == 1 { "" } else { "s" }))
            .collect::<Vec<String>>()
            .join(", ")
    }

    /// Non-zero `(count, unit)` pairs, largest unit first.
    pub fn components(seconds: u64) -> Vec<(u64, &'static str)> {
        let mut rest = seconds;
        let mut out = Vec::new();
        for (size, unit) in UNITS {
            let count = rest / size;
            if count > 0 {
                out.push((count, unit));
                rest %= size;
            }
        }
        out
    }
}
