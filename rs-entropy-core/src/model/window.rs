use std::collections::VecDeque;

/// Sliding window over the most recent tokens of a stream.
///
/// A `ContextWindow` holds at most `capacity` tokens in arrival order.
/// Pushing onto a full window evicts the oldest token and hands it back
/// to the caller, so the window always contains the last `capacity`
/// tokens seen.
///
/// ## Responsibilities:
/// - Track the current context during model construction
/// - Carry the generation context, rotating one token per step
/// - Produce ordered snapshots usable as map keys
///
/// ## Invariants
/// - `capacity` is always >= 1
/// - `len() <= capacity()` at all times
/// - Tokens leave in the exact order they entered
#[derive(Clone, Debug)]
pub struct ContextWindow<T> {
	/// Tokens currently in the window, oldest at the front.
	tokens: VecDeque<T>,
	/// Maximum number of tokens retained.
	capacity: usize,
}

impl<T: Clone> ContextWindow<T> {
	/// Creates an empty window retaining the last `capacity` tokens.
	///
	/// # Panics
	/// Panics if `capacity` is 0; a zero-width context is meaningless.
	pub fn new(capacity: usize) -> Self {
		assert!(capacity >= 1, "window capacity must be at least 1");
		Self {
			tokens: VecDeque::with_capacity(capacity),
			capacity,
		}
	}

	/// Creates a window already filled with `context`, oldest first.
	///
	/// The capacity is the context length. Used to resume generation
	/// from a seed drawn out of a model.
	///
	/// # Panics
	/// Panics if `context` is empty.
	pub fn from_context(context: Vec<T>) -> Self {
		assert!(!context.is_empty(), "window capacity must be at least 1");
		let capacity = context.len();
		Self {
			tokens: VecDeque::from(context),
			capacity,
		}
	}

	/// Appends a token, evicting the oldest one if the window is full.
	///
	/// # Returns
	/// - `Some(oldest)` when the window was at capacity
	/// - `None` while the window is still filling up
	pub fn push(&mut self, token: T) -> Option<T> {
		let evicted = if self.tokens.len() == self.capacity {
			self.tokens.pop_front()
		} else {
			None
		};
		self.tokens.push_back(token);
		evicted
	}

	/// Returns an ordered copy of the current content, oldest first.
	///
	/// The copy is independent of the window; later pushes do not
	/// change it.
	pub fn snapshot(&self) -> Vec<T> {
		self.tokens.iter().cloned().collect()
	}

	/// Returns `true` once the window holds exactly `capacity` tokens.
	pub fn is_full(&self) -> bool {
		self.tokens.len() == self.capacity
	}

	/// Number of tokens currently held.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Returns `true` while no token has been pushed yet.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Maximum number of tokens retained.
	pub fn capacity(&self) -> usize {
		self.capacity
	}
}
