//! Scalar information-theory helpers.
//!
//! Stateless functions shared by the model core and the example
//! programs: Shannon entropy from probabilities or raw frequencies,
//! Gaussian channel capacity, the standard normal CDF, and small
//! bookkeeping helpers for joint frequency tables.
//!
//! All entropies are in bits.

use std::iter::Sum;

/// Shannon entropy of a probability distribution, in bits.
///
/// Zero probabilities contribute nothing (`0 * log2(0)` is taken as
/// 0), so deterministic and partially-zero distributions come out at
/// their exact value instead of NaN.
///
/// # Notes
/// - The input is assumed to sum to 1; this is not checked.
pub fn entropy_from_probabilities(probabilities: &[f64]) -> f64 {
	probabilities
		.iter()
		.filter(|probability| **probability > 0.0)
		.fold(0.0, |entropy, probability| entropy - probability * probability.log2())
}

/// Shannon entropy of a frequency distribution, in bits.
///
/// Normalizes the counts and applies `entropy_from_probabilities`.
/// An empty or all-zero slice has entropy 0.
pub fn entropy_from_frequencies(frequencies: &[usize]) -> f64 {
	let total: usize = frequencies.iter().sum();
	if total == 0 {
		return 0.0;
	}

	frequencies
		.iter()
		.filter(|frequency| **frequency > 0)
		.fold(0.0, |entropy, frequency| {
			let probability = *frequency as f64 / total as f64;
			entropy - probability * probability.log2()
		})
}

/// Capacity of a Gaussian channel in bits per transmission.
///
/// `C = 0.5 * log2(1 + snr)` where `snr` is the signal to noise
/// ratio `P/N`.
pub fn gaussian_channel_capacity(snr: f64) -> f64 {
	0.5 * (1.0 + snr).log2()
}

/// Standard normal cumulative distribution function.
///
/// `phi(x) = (1 + erf(x / sqrt(2))) / 2`.
pub fn cumulative_gaussian(x: f64) -> f64 {
	(1.0 + erf(x / std::f64::consts::SQRT_2)) / 2.0
}

/// Error function by the Abramowitz & Stegun 7.1.26 rational
/// approximation, accurate to about 1.5e-7.
fn erf(x: f64) -> f64 {
	const A1: f64 = 0.254829592;
	const A2: f64 = -0.284496736;
	const A3: f64 = 1.421413741;
	const A4: f64 = -1.453152027;
	const A5: f64 = 1.061405429;
	const P: f64 = 0.3275911;

	let sign = if x < 0.0 { -1.0 } else { 1.0 };
	let x = x.abs();

	let t = 1.0 / (1.0 + P * x);
	let y = 1.0 - ((((A5 * t + A4) * t + A3) * t + A2) * t + A1) * t * (-x * x).exp();

	sign * y
}

/// Row totals of a rectangular table.
pub fn row_totals<T: Copy + Sum>(table: &[Vec<T>]) -> Vec<T> {
	table.iter().map(|row| row.iter().copied().sum()).collect()
}

/// Column totals of a rectangular table.
pub fn col_totals<T: Copy + Sum>(table: &[Vec<T>]) -> Vec<T> {
	let width = table.first().map_or(0, Vec::len);
	(0..width)
		.map(|col| table.iter().map(|row| row[col]).sum())
		.collect()
}

/// Flattens a table into a single row-major list.
pub fn flatten<T: Copy>(table: &[Vec<T>]) -> Vec<T> {
	table.iter().flat_map(|row| row.iter().copied()).collect()
}

/// Formats a value with a fixed number of decimal places, for the
/// tables the example programs print.
pub fn rounded(value: f64, places: usize) -> String {
	format!("{:.*}", places, value)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn uniform_distributions_hit_the_log_bound() {
		assert_eq!(entropy_from_probabilities(&[0.25, 0.25, 0.25, 0.25]), 2.0);
		assert_eq!(entropy_from_frequencies(&[1, 1]), 1.0);
	}

	#[test]
	fn deterministic_distributions_have_zero_entropy() {
		assert_eq!(entropy_from_probabilities(&[1.0]), 0.0);
		assert_eq!(entropy_from_frequencies(&[7]), 0.0);
	}

	#[test]
	fn zero_entries_contribute_nothing() {
		assert_eq!(entropy_from_probabilities(&[0.5, 0.0, 0.5]), 1.0);
		assert_eq!(entropy_from_frequencies(&[3, 0, 1]), entropy_from_frequencies(&[3, 1]));
	}

	#[test]
	fn empty_distributions_have_zero_entropy() {
		assert_eq!(entropy_from_probabilities(&[]), 0.0);
		assert_eq!(entropy_from_frequencies(&[]), 0.0);
		assert_eq!(entropy_from_frequencies(&[0, 0]), 0.0);
	}

	#[test]
	fn skewed_frequencies_match_the_closed_form() {
		// H(3/4, 1/4) = 2 - (3/4) * log2(3)
		let expected = 2.0 - 0.75 * 3.0_f64.log2();
		assert!((entropy_from_frequencies(&[3, 1]) - expected).abs() < 1e-12);
	}

	#[test]
	fn channel_table_entropies_match_the_reference_values() {
		// Input/output counts of the 4x4 discrete channel example
		let distribution = vec![
			vec![12, 15, 2, 0],
			vec![4, 21, 10, 0],
			vec![0, 10, 21, 4],
			vec![0, 2, 15, 12],
		];

		let hx = entropy_from_frequencies(&col_totals(&distribution));
		let hy = entropy_from_frequencies(&row_totals(&distribution));
		let hxy = entropy_from_frequencies(&flatten(&distribution));

		assert_eq!(rounded(hx, 3), "1.811");
		assert_eq!(rounded(hy, 3), "1.994");
		assert_eq!(rounded(hxy, 3), "3.296");
		assert_eq!(rounded(hx + hy - hxy, 3), "0.509");
	}

	#[test]
	fn table_helpers_cover_rows_columns_and_cells() {
		let table = vec![vec![1, 2], vec![3, 4]];
		assert_eq!(row_totals(&table), vec![3, 7]);
		assert_eq!(col_totals(&table), vec![4, 6]);
		assert_eq!(flatten(&table), vec![1, 2, 3, 4]);
		assert_eq!(col_totals::<usize>(&[]), Vec::<usize>::new());
	}

	#[test]
	fn capacity_grows_with_snr() {
		assert_eq!(gaussian_channel_capacity(0.0), 0.0);
		assert_eq!(gaussian_channel_capacity(1.0), 0.5);
		assert_eq!(gaussian_channel_capacity(3.0), 1.0);
	}

	#[test]
	fn cumulative_gaussian_matches_known_points() {
		assert!((cumulative_gaussian(0.0) - 0.5).abs() < 1e-7);
		assert!((cumulative_gaussian(1.96) - 0.975_002).abs() < 1e-5);
		assert!((cumulative_gaussian(3.0) - 0.998_650).abs() < 1e-5);
		assert!(cumulative_gaussian(-6.0) < 1e-8);
	}

	#[test]
	fn cumulative_gaussian_is_symmetric() {
		for x in [0.3, 0.7, 1.5, 2.5] {
			let sum = cumulative_gaussian(x) + cumulative_gaussian(-x);
			assert!((sum - 1.0).abs() < 1e-12);
		}
	}

	#[test]
	fn rounded_prints_fixed_decimals() {
		assert_eq!(rounded(1.8112781, 3), "1.811");
		assert_eq!(rounded(2.0, 3), "2.000");
		assert_eq!(rounded(0.5095, 2), "0.51");
	}
}
