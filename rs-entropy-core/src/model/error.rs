use std::fmt;

/// Errors raised by model construction, estimation and generation.
///
/// Every fallible operation in the model module reports one of these
/// variants; nothing is retried or defaulted internally.
///
/// # Invariants
/// - `SamplingInvariant` is only reachable through corrupted counts.
///   The cumulative scans always terminate before the end of a table
///   whose total matches its entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelError {
	/// Model order 0 was requested.
	ZeroOrder,
	/// The model holds no observations (input shorter than order + 1).
	EmptyModel,
	/// Weighted pick on a frequency table with a zero total.
	EmptyDistribution,
	/// Generation reached a context that was never observed.
	UnseenContext,
	/// A cumulative frequency scan ended before reaching its target.
	SamplingInvariant,
}

impl fmt::Display for ModelError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ZeroOrder => write!(f, "Model order must be at least 1"),
			Self::EmptyModel => write!(f, "No observations in model"),
			Self::EmptyDistribution => write!(f, "Empty frequency distribution"),
			Self::UnseenContext => write!(f, "Context was never observed"),
			Self::SamplingInvariant => write!(f, "Cumulative scan failed to reach target"),
		}
	}
}

impl std::error::Error for ModelError {}

#[cfg(test)]
mod tests {
	use super::ModelError;

	#[test]
	fn messages_are_stable() {
		assert_eq!(ModelError::ZeroOrder.to_string(), "Model order must be at least 1");
		assert_eq!(ModelError::EmptyModel.to_string(), "No observations in model");
		assert_eq!(ModelError::EmptyDistribution.to_string(), "Empty frequency distribution");
		assert_eq!(ModelError::UnseenContext.to_string(), "Context was never observed");
		assert_eq!(
			ModelError::SamplingInvariant.to_string(),
			"Cumulative scan failed to reach target"
		);
	}

	#[test]
	fn is_an_error_type() {
		fn takes_error<E: std::error::Error>(_e: E) {}
		takes_error(ModelError::EmptyModel);
	}
}
