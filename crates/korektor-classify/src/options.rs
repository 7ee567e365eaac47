// Classifier options.

/// Configuration for word classification.
#[derive(Debug, Clone, Copy)]
pub struct ClassifierOptions {
    /// Minimum recognition confidence for a word to count as readable.
    /// The gate is non-strict: `confidence >= min_confidence` passes.
    /// Unreadable words are never merged into a hyphenation span and
    /// never reach a dictionary lookup.
    pub min_confidence: f64,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            min_confidence: 0.8,
        }
    }
}

impl ClassifierOptions {
    pub(crate) fn is_readable(&self, confidence: f64) -> bool {
        confidence >= self.min_confidence
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readability_gate_is_non_strict() {
        let options = ClassifierOptions::default();
        assert!(options.is_readable(0.8));
        assert!(options.is_readable(1.0));
        assert!(!options.is_readable(0.799));
    }
}
