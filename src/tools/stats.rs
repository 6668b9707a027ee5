use std::cmp::Ordering;

/// Descriptive statistics over slices of f64.
///
/// Empty input never fails: the numeric results are 0 and `mode` is empty.
pub struct Stats;

impl Stats {
    pub fn sum(data: &[f64]) -> f64 {
        data.iter().sum()
    }

    /// 0 for an empty slice
    pub fn product(data: &[f64]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        data.iter().product()
    }

    pub fn average(data: &[f64]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        Self::sum(data) / data.len() as f64
    }

    pub fn mean(data: &[f64]) -> f64 {
        Self::average(data)
    }

    /// middle value, or the mean of the two middle values
    pub fn median(data: &[f64]) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        let sorted = sorted(data);
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        }
    }

    /// All values sharing the highest frequency, ascending.
    pub fn mode(data: &[f64]) -> Vec<f64> {
        let sorted = sorted(data);
        let mut runs: Vec<(f64, usize)> = Vec::new();
        for v in sorted {
            match runs.last_mut() {
                Some((last, count)) if *last == v => *count += 1,
                _ => runs.push((v, 1)),
            }
        }

        let top = runs.iter().map(|(_, c)| *c).max().unwrap_or(0);
        runs.into_iter().filter(|(_, c)| *c == top).map(|(v, _)| v).collect()
    }

    /// Sample variance (n - 1) unless `population`; 0 when there are too few values.
    pub fn variance(data: &[f64], population: bool) -> f64 {
        let n = data.len();
        let divisor = if population { n } else { n.saturating_sub(1) };
        if divisor == 0 {
            return 0.0;
        }
        let mean = Self::average(data);
        let squares: f64 = data.iter().map(|x| (x - mean) * (x - mean)).sum();
        squares / divisor as f64
    }

    pub fn standard_deviation(data: &[f64], population: bool) -> f64 {
        Self::variance(data, population).sqrt()
    }

    pub fn min(data: &[f64]) -> f64 {
        data.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    pub fn max(data: &[f64]) -> f64 {
        data.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    pub fn range(data: &[f64]) -> f64 {
        Self::max(data) - Self::min(data)
    }

    /// Linear interpolation between closest ranks, `p` in percent clamped to [0, 100].
    pub fn percentile(data: &[f64], p: f64) -> f64 {
        if data.is_empty() {
            return 0.0;
        }
        let sorted = sorted(data);
        let rank = p.clamp(0.0, 100.0) / 100.0 * (sorted.len() - 1) as f64;
        let low = rank.floor() as usize;
        let high = rank.ceil() as usize;
        sorted[low] + (sorted[high] - sorted[low]) * (rank - low as f64)
    }

    /// 0 on empty input or any non-positive value
    pub fn geometric_mean(data: &[f64]) -> f64 {
        if data.is_empty() || data.iter().any(|x| *x <= 0.0) {
            return 0.0;
        }
        let logs: f64 = data.iter().map(|x| x.ln()).sum();
        (logs / data.len() as f64).exp()
    }

    /// 0 on empty input or any non-positive value
    pub fn harmonic_mean(data: &[f64]) -> f64 {
        if data.is_empty() || data.iter().any(|x| *x <= 0.0) {
            return 0.0;
        }
        let inverses: f64 = data.iter().map(|x| 1.0 / x).sum();
        data.len() as f64 / inverses
    }
}

fn sorted(data: &[f64]) -> Vec<f64> {
    let mut v = data.to_vec();
    v.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty() {
        let empty: [f64; 0] = [];
        assert_eq!(Stats::average(&empty), 0.0);
        assert_eq!(Stats::median(&empty), 0.0);
        assert!(Stats::mode(&empty).is_empty());
        assert_eq!(Stats::variance(&empty, false), 0.0);
        assert_eq!(Stats::standard_deviation(&empty, true), 0.0);
        assert_eq!(Stats::sum(&empty), 0.0);
        assert_eq!(Stats::product(&empty), 0.0);
        assert_eq!(Stats::min(&empty), 0.0);
        assert_eq!(Stats::max(&empty), 0.0);
        assert_eq!(Stats::range(&empty), 0.0);
        assert_eq!(Stats::percentile(&empty, 50.0), 0.0);
    }

    #[test]
    fn test_central() {
        assert_eq!(Stats::average(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(Stats::median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(Stats::median(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(Stats::mode(&[1.0, 2.0, 2.0, 3.0, 3.0, 4.0]), vec![2.0, 3.0]);
        assert_eq!(Stats::mode(&[7.0]), vec![7.0]);
    }

    #[test]
    fn test_spread() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(Stats::variance(&data, true), 4.0));
        assert!(close(Stats::standard_deviation(&data, true), 2.0));
        assert!(close(Stats::variance(&data, false), 32.0 / 7.0));
        assert_eq!(Stats::variance(&[3.0], false), 0.0);
        assert_eq!(Stats::variance(&[3.0], true), 0.0);
        assert_eq!(Stats::range(&data), 7.0);
        assert_eq!(Stats::min(&data), 2.0);
        assert_eq!(Stats::max(&data), 9.0);
    }

    #[test]
    fn test_aggregates() {
        assert_eq!(Stats::sum(&[1.5, 2.5]), 4.0);
        assert_eq!(Stats::product(&[2.0, 3.0, 4.0]), 24.0);
        assert_eq!(Stats::percentile(&[1.0, 2.0, 3.0, 4.0, 5.0], 50.0), 3.0);
        assert_eq!(Stats::percentile(&[1.0, 2.0, 3.0, 4.0], 150.0), 4.0);
        assert!(close(Stats::percentile(&[10.0, 20.0], 25.0), 12.5));
        assert!(close(Stats::geometric_mean(&[2.0, 8.0]), 4.0));
        assert!(close(Stats::harmonic_mean(&[1.0, 4.0, 4.0]), 2.0));
        assert_eq!(Stats::geometric_mean(&[1.0, -1.0]), 0.0);
    }
}
