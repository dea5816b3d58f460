use rand::Rng;

use crate::model::error::ModelError;
use crate::model::markov_model::MarkovModel;
use crate::model::window::ContextWindow;

/// Step-by-step sequence generator over a borrowed model.
///
/// Construction draws one weighted random seed context and loads it
/// into a fresh window. Each iteration step then:
/// - looks up the successor table for the current context,
/// - samples the successor with probability proportional to count,
/// - rotates the window, emitting the evicted oldest token.
///
/// The generator runs through three phases: seeded (after `new`),
/// emitting (while steps remain), done (after the requested length
/// or the first error). An error ends the iteration for good; the
/// failed step consumes no part of the requested length.
///
/// # Responsibilities
/// - Own the generation cursor (window, random state, remaining length)
/// - Surface unseen contexts and sampling failures as errors instead
///   of patching over them
/// - Emit exactly `length` tokens on the happy path
#[derive(Debug)]
pub struct Generator<'m, T, R> {
	/// Model the successors are drawn from.
	model: &'m MarkovModel<T>,
	/// Current context, rotated once per emitted token.
	window: ContextWindow<T>,
	/// Random source for successor picks.
	rng: R,
	/// Tokens still to emit.
	remaining: usize,
	/// Set when a step failed; the iterator stays finished.
	failed: bool,
}

impl<'m, T: Clone + Ord, R: Rng> Generator<'m, T, R> {
	/// Creates a generator that will emit `length` tokens.
	///
	/// The seed context is drawn here, so an empty model is reported
	/// immediately, even for `length` 0.
	///
	/// # Errors
	/// Returns `EmptyModel` if the model holds no observations.
	pub fn new(model: &'m MarkovModel<T>, length: usize, mut rng: R) -> Result<Self, ModelError> {
		let seed = model.random_seed(&mut rng)?.clone();
		Ok(Self {
			model,
			window: ContextWindow::from_context(seed),
			rng,
			remaining: length,
			failed: false,
		})
	}

	/// Performs one generation step, emitting the token that leaves
	/// the window.
	fn step(&mut self) -> Result<T, ModelError> {
		let context = self.window.snapshot();
		let table = self.model.table(&context).ok_or(ModelError::UnseenContext)?;
		let successor = table.pick(&mut self.rng)?.clone();

		// Should not panic, the generation window starts full
		Ok(self.window.push(successor).unwrap())
	}
}

impl<'m, T: Clone + Ord, R: Rng> Iterator for Generator<'m, T, R> {
	type Item = Result<T, ModelError>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.remaining == 0 || self.failed {
			return None;
		}

		let step = self.step();
		match step {
			Ok(_) => self.remaining -= 1,
			Err(_) => self.failed = true,
		}
		Some(step)
	}
}
