//! Descriptive statistics over a windowed hourly series.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Summary statistics for one windowed series.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub median: f64,
    /// All values sharing the highest frequency, ascending.
    pub modes: Vec<f64>,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl Summary {
    /// Compute every statistic over `values`.
    pub fn compute(values: &[f64]) -> Result<Self> {
        Ok(Summary {
            count: values.len(),
            mean: mean(values)?,
            median: median(values)?,
            modes: modes(values)?,
            std_dev: std_dev(values)?,
            min: min(values)?,
            max: max(values)?,
        })
    }

    /// Spread of the series (`max - min`).
    pub fn amplitude(&self) -> f64 {
        self.max - self.min
    }
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle value of the sorted series; the average of the two middle values
/// when the length is even.
pub fn median(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    Ok(if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    })
}

/// Every value that reaches the highest frequency, in ascending order.
///
/// When no value repeats, each distinct value is a mode.
pub fn modes(values: &[f64]) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for &v in &sorted {
        match runs.last_mut() {
            Some((prev, n)) if *prev == v => *n += 1,
            _ => runs.push((v, 1)),
        }
    }
    let best = runs.iter().map(|&(_, n)| n).max().unwrap_or(0);
    Ok(runs
        .into_iter()
        .filter(|&(_, n)| n == best)
        .map(|(v, _)| v)
        .collect())
}

/// Population standard deviation (divisor `n`).
pub fn std_dev(values: &[f64]) -> Result<f64> {
    let mean = mean(values)?;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;
    Ok(variance.sqrt())
}

/// Smallest value.
pub fn min(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(values.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest value.
pub fn max(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Round to `precision` decimal places with exact halves moving away from
/// zero, so `round_half_up(0.25, 1)` is `0.3` and `round_half_up(-0.25, 1)`
/// is `-0.3`.
///
/// Works on the shortest decimal representation of the value rather than on
/// scaled floats, so inputs such as `8.45` round on their printed digits
/// instead of their binary neighbors. Non-finite values pass through
/// unchanged.
pub fn round_half_up(value: f64, precision: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let negative = value.is_sign_negative();
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((i, f)) => (i, f),
        None => (repr.as_str(), ""),
    };
    let precision = precision as usize;
    if frac_part.len() <= precision {
        return value;
    }
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(precision))
        .map(|b| b - b'0')
        .collect();
    if frac_part.as_bytes()[precision] - b'0' >= 5 {
        // Decimal carry over the kept digits.
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, 1);
                break;
            }
            i -= 1;
            if digits[i] == 9 {
                digits[i] = 0;
            } else {
                digits[i] += 1;
                break;
            }
        }
    }
    let magnitude = digits
        .iter()
        .fold(0.0_f64, |acc, &d| acc * 10.0 + f64::from(d))
        / 10f64.powi(precision as i32);
    if negative { -magnitude } else { magnitude }
}
