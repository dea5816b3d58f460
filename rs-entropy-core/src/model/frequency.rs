use std::collections::BTreeMap;

use rand::Rng;

use crate::model::error::ModelError;

/// Frequency table over the outcomes observed after one context.
///
/// A `FrequencyTable` stores how many times each outcome followed a
/// given context during training. Conceptually, this is a node in a
/// Markov chain where outgoing edges are weighted by their number of
/// observations.
///
/// Outcomes are kept in a `BTreeMap`, so every scan over the table
/// runs in ascending key order. This makes entropy sums reproducible
/// bit for bit and gives the weighted pick a documented tie-break:
/// a target landing exactly on a cumulative boundary resolves to the
/// smallest key.
///
/// ## Responsibilities:
/// - Accumulate outcome occurrences during learning
/// - Report totals and per-outcome counts for entropy estimation
/// - Sample an outcome with probability proportional to its count
///
/// ## Invariants
/// - Each recorded outcome has a count >= 1
/// - `total()` equals the sum of all counts
#[derive(Clone, Debug)]
pub struct FrequencyTable<T> {
	/// Observation counts indexed by outcome.
	/// Example: { 'e' => 42, 'a' => 3 }
	counts: BTreeMap<T, usize>,
}

impl<T: Clone + Ord> FrequencyTable<T> {
	/// Creates a table with no observations.
	pub fn new() -> Self {
		Self { counts: BTreeMap::new() }
	}

	/// Records one occurrence of `outcome`.
	///
	/// - If the outcome already exists, its occurrence count is increased.
	/// - Otherwise, a new entry is created with an initial count of 1.
	pub fn record(&mut self, outcome: T) {
		*self.counts.entry(outcome).or_insert(0) += 1;
	}

	/// Total number of recorded observations.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Number of distinct outcomes.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	/// Returns `true` if nothing was recorded yet.
	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Occurrence count of `outcome`, 0 if it was never recorded.
	pub fn count(&self, outcome: &T) -> usize {
		self.counts.get(outcome).copied().unwrap_or(0)
	}

	/// Iterates over `(outcome, count)` pairs in ascending key order.
	pub fn iter(&self) -> impl Iterator<Item = (&T, &usize)> {
		self.counts.iter()
	}

	/// Occurrence counts in ascending key order.
	///
	/// Convenience for entropy estimation, which only needs the counts.
	pub fn frequencies(&self) -> Vec<usize> {
		self.counts.values().copied().collect()
	}

	/// Samples an outcome using weighted random sampling.
	///
	/// The probability of selecting an outcome is proportional to its
	/// occurrence count. The draw picks a target in `[1, total]` and
	/// scans outcomes in ascending key order until the cumulative
	/// count reaches the target.
	///
	/// This method performs:
	/// - an O(n) sum over the counts
	/// - an O(n) cumulative scan to select a bucket
	///
	/// # Errors
	/// Returns `EmptyDistribution` if the table has no observations.
	pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, ModelError> {
		let total = self.total();
		if total == 0 {
			return Err(ModelError::EmptyDistribution);
		}

		let target = rng.random_range(1..=total);
		self.pick_at(target)
	}

	/// Cumulative scan behind `pick`, with the target supplied.
	///
	/// Kept separate so exact boundary targets can be exercised
	/// directly.
	///
	/// # Errors
	/// Returns `SamplingInvariant` if the scan ends before the
	/// cumulative count reaches `target`.
	fn pick_at(&self, target: usize) -> Result<&T, ModelError> {
		let mut cumulative = 0;
		for (outcome, occurrence) in &self.counts {
			cumulative += occurrence;
			if cumulative >= target {
				return Ok(outcome);
			}
		}

		// Only reachable if counts were corrupted after the total was taken
		Err(ModelError::SamplingInvariant)
	}
}
