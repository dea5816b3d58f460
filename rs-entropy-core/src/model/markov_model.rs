use std::collections::BTreeMap;

use rand::Rng;

use crate::information;
use crate::model::error::ModelError;
use crate::model::frequency::FrequencyTable;
use crate::model::generator::Generator;
use crate::model::window::ContextWindow;

/// A context of exactly `order` tokens, oldest first, used as a map key.
pub type Context<T> = Vec<T>;

/// Represents an order-k Markov model over a token stream.
///
/// The `MarkovModel` stores a frequency table for every context of
/// `order` consecutive tokens observed in the input and allows
/// entropy-rate estimation and probabilistic sequence generation
/// from the learned tables.
///
/// # Responsibilities
/// - Build the model from any token stream in a single pass
/// - Accumulate successor counts for each context
/// - Estimate the entropy rate of the source in bits per token
/// - Draw weighted random seeds and generate new sequences
///
/// # Invariants
/// - `order` is always >= 1
/// - Each key in `contexts` has length exactly `order`
/// - All successor counts are >= 1, so every stored table has a
///   positive total
#[derive(Clone, Debug)]
pub struct MarkovModel<T> {
	/// The order of the model (number of tokens in a context)
	order: usize, // must be >= 1

	/// Mapping from a context (length `order`) to its successor table
	contexts: BTreeMap<Context<T>, FrequencyTable<T>>,
}

impl<T: Clone + Ord> MarkovModel<T> {
	/// Builds a model of the given order from a token stream.
	///
	/// For every incoming token, if the window already holds `order`
	/// tokens, the transition from the current context to that token
	/// is recorded first; the token is then appended either way. The
	/// first `order` tokens of the stream therefore only warm up the
	/// window and produce no observation.
	///
	/// # Notes
	/// - A stream shorter than `order + 1` tokens yields an empty
	///   model. That is not an error here; estimation and generation
	///   on an empty model fail with `EmptyModel`.
	///
	/// # Errors
	/// Returns `ZeroOrder` if `order` is 0.
	pub fn from_tokens<I>(tokens: I, order: usize) -> Result<Self, ModelError>
	where
		I: IntoIterator<Item = T>,
	{
		if order == 0 {
			return Err(ModelError::ZeroOrder);
		}

		let mut contexts: BTreeMap<Context<T>, FrequencyTable<T>> = BTreeMap::new();
		let mut window = ContextWindow::new(order);

		for token in tokens {
			if window.is_full() {
				// Observe the transition before the token enters the window
				contexts
					.entry(window.snapshot())
					.or_insert_with(FrequencyTable::new)
					.record(token.clone());
			}
			window.push(token);
		}

		Ok(Self { order, contexts })
	}

	/// The order of the model (context length in tokens).
	pub fn order(&self) -> usize {
		self.order
	}

	/// Number of distinct contexts observed.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	/// Returns `true` if no transition was ever recorded.
	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Total number of recorded transitions across all contexts.
	pub fn total_observations(&self) -> usize {
		self.contexts.values().map(FrequencyTable::total).sum()
	}

	/// Returns the successor table for `context`, if it was observed.
	pub fn table(&self, context: &[T]) -> Option<&FrequencyTable<T>> {
		self.contexts.get(context)
	}

	/// Iterates over `(context, table)` pairs in ascending key order.
	pub fn contexts(&self) -> impl Iterator<Item = (&Context<T>, &FrequencyTable<T>)> {
		self.contexts.iter()
	}

	/// Estimates the entropy rate of the source in bits per token.
	///
	/// Computes the conditional entropy of each context's successor
	/// distribution and averages them weighted by how often each
	/// context occurred:
	///
	/// `H = sum(n_c * H(f_c)) / sum(n_c)`
	///
	/// A context with a single successor contributes exactly 0 bits.
	/// Iterating the tables in key order makes the sum reproducible
	/// bit for bit.
	///
	/// # Errors
	/// Returns `EmptyModel` if the model holds no observations.
	pub fn entropy_rate(&self) -> Result<f64, ModelError> {
		if self.contexts.is_empty() {
			return Err(ModelError::EmptyModel);
		}

		let mut weighted_entropy = 0.0;
		let mut total = 0;
		for table in self.contexts.values() {
			let occurrences = table.total();
			weighted_entropy +=
				occurrences as f64 * information::entropy_from_frequencies(&table.frequencies());
			total += occurrences;
		}

		Ok(weighted_entropy / total as f64)
	}

	/// Draws a random context (seed) from the model.
	///
	/// Useful for starting a generation sequence. The probability of
	/// selecting a context is proportional to how many observations
	/// it accumulated, so frequent contexts seed more often. The draw
	/// picks a target in `[1, total_observations]` and scans contexts
	/// in ascending key order until the cumulative total reaches the
	/// target.
	///
	/// # Errors
	/// Returns `EmptyModel` if the model holds no observations.
	pub fn random_seed<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&Context<T>, ModelError> {
		if self.contexts.is_empty() {
			return Err(ModelError::EmptyModel);
		}

		let target = rng.random_range(1..=self.total_observations());

		let mut cumulative = 0;
		for (context, table) in &self.contexts {
			cumulative += table.total();
			if cumulative >= target {
				return Ok(context);
			}
		}

		// Only reachable if counts were corrupted after the total was taken
		Err(ModelError::SamplingInvariant)
	}

	/// Generates `length` tokens from the model.
	///
	/// Draws one random seed, then walks the chain step by step,
	/// collecting the emitted tokens. See `Generator` for the
	/// step-by-step variant.
	///
	/// # Errors
	/// - `EmptyModel` if the model holds no observations, even when
	///   `length` is 0 (the seed is always drawn).
	/// - `UnseenContext` if a step reaches a context absent from the
	///   model.
	pub fn generate<R: Rng + ?Sized>(
		&self,
		length: usize,
		rng: &mut R,
	) -> Result<Vec<T>, ModelError> {
		Generator::new(self, length, rng)?.collect()
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::MarkovModel;
	use crate::model::error::ModelError;

	fn chars(text: &str) -> impl Iterator<Item = char> + '_ {
		text.chars()
	}

	#[test]
	fn zero_order_is_rejected() {
		assert_eq!(
			MarkovModel::from_tokens(chars("abc"), 0).unwrap_err(),
			ModelError::ZeroOrder
		);
	}

	#[test]
	fn short_streams_yield_an_empty_model() {
		// order tokens fill the window but record nothing
		let model = MarkovModel::from_tokens(chars("abc"), 3).unwrap();
		assert!(model.is_empty());
		assert_eq!(model.len(), 0);
		assert_eq!(model.entropy_rate(), Err(ModelError::EmptyModel));

		let mut rng = StdRng::seed_from_u64(1);
		assert!(matches!(model.random_seed(&mut rng), Err(ModelError::EmptyModel)));
		assert_eq!(model.generate(5, &mut rng), Err(ModelError::EmptyModel));
	}

	#[test]
	fn first_observation_needs_order_plus_one_tokens() {
		let model = MarkovModel::from_tokens(chars("abcd"), 3).unwrap();
		assert_eq!(model.len(), 1);
		assert_eq!(model.total_observations(), 1);
		assert_eq!(model.table(&['a', 'b', 'c']).unwrap().count(&'d'), 1);
	}

	#[test]
	fn transitions_are_counted_per_context() {
		let model = MarkovModel::from_tokens(chars("abab"), 1).unwrap();
		assert_eq!(model.table(&['a']).unwrap().count(&'b'), 2);
		assert_eq!(model.table(&['b']).unwrap().count(&'a'), 1);
		assert_eq!(model.total_observations(), 3);
		assert!(model.table(&['z']).is_none());
	}

	#[test]
	fn deterministic_source_has_zero_entropy_rate() {
		let model = MarkovModel::from_tokens(chars("abababab"), 1).unwrap();
		assert_eq!(model.entropy_rate(), Ok(0.0));
	}

	#[test]
	fn balanced_binary_choices_cost_one_bit() {
		// 'a' and 'b' are each followed once by 'a' and once by 'b'
		let model = MarkovModel::from_tokens(chars("aabba"), 1).unwrap();
		assert_eq!(model.entropy_rate(), Ok(1.0));
	}

	#[test]
	fn entropy_rate_weights_contexts_by_frequency() {
		// 'a' -> {b: 1, c: 1} (1 bit, weight 2), 'b' -> {a: 1} and
		// 'c' -> {a: 1} (0 bits, weight 1 each)
		let model = MarkovModel::from_tokens(chars("abaca"), 1).unwrap();
		let rate = model.entropy_rate().unwrap();
		assert!((rate - 0.5).abs() < 1e-12);
	}

	#[test]
	fn seed_context_always_comes_from_the_model() {
		let model = MarkovModel::from_tokens(chars("the cat sat on the mat "), 2).unwrap();
		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..50 {
			let seed = model.random_seed(&mut rng).unwrap();
			assert_eq!(seed.len(), 2);
			assert!(model.table(seed).is_some());
		}
	}

	#[test]
	fn single_context_model_always_seeds_with_it() {
		let model = MarkovModel::from_tokens(chars("aaaa"), 1).unwrap();
		let mut rng = StdRng::seed_from_u64(3);
		assert_eq!(model.random_seed(&mut rng), Ok(&vec!['a']));
	}

	#[test]
	fn generation_has_the_requested_length() {
		let model = MarkovModel::from_tokens(chars("abcabcabc"), 1).unwrap();
		let mut rng = StdRng::seed_from_u64(5);
		let sample = model.generate(50, &mut rng).unwrap();
		assert_eq!(sample.len(), 50);
		assert!(sample.iter().all(|c| "abc".contains(*c)));
	}

	#[test]
	fn cyclic_input_never_reaches_an_unseen_context() {
		let model = MarkovModel::from_tokens(chars("abcabcabcabc"), 1).unwrap();
		let mut rng = StdRng::seed_from_u64(9);
		for _ in 0..20 {
			assert!(model.generate(30, &mut rng).is_ok());
		}
	}

	#[test]
	fn zero_length_generation_still_draws_a_seed() {
		let model = MarkovModel::from_tokens(chars("abab"), 1).unwrap();
		let mut rng = StdRng::seed_from_u64(2);
		assert_eq!(model.generate(0, &mut rng), Ok(Vec::new()));

		let empty = MarkovModel::from_tokens(chars(""), 1).unwrap();
		assert_eq!(empty.generate(0, &mut rng), Err(ModelError::EmptyModel));
	}

	#[test]
	fn generation_is_deterministic_under_a_seeded_rng() {
		let corpus = "the cat the cat the cat ";
		let model = MarkovModel::from_tokens(chars(corpus), 2).unwrap();
		let mut first_rng = StdRng::seed_from_u64(21);
		let mut second_rng = StdRng::seed_from_u64(21);
		let first = model.generate(40, &mut first_rng).unwrap();
		let second = model.generate(40, &mut second_rng).unwrap();
		assert_eq!(first, second);
		assert_eq!(first.len(), 40);
	}

	#[test]
	fn word_tokens_work_the_same_as_characters() {
		let words = ["the", "cat", "the", "dog", "the", "cat"];
		let model =
			MarkovModel::from_tokens(words.iter().map(|w| w.to_string()), 1).unwrap();
		assert_eq!(model.table(&["the".to_owned()]).unwrap().total(), 3);
		assert_eq!(model.table(&["cat".to_owned()]).unwrap().count(&"the".to_owned()), 1);
	}
}
