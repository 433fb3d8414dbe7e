//! Tunable limits that drive detection and insight rules.

use serde::{Deserialize, Serialize};

use super::resolver::DEFAULT_MIN_CONFIDENCE;
use super::structure::DEFAULT_MAX_FUNCTIONS;

/// Immutable threshold set consulted by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Minimum resolver score before detection may override the hint.
    pub min_confidence: u32,
    /// Cyclomatic sketch above which decomposition is suggested.
    pub max_cyclomatic: usize,
    /// Comment density below which documentation is suggested.
    pub min_comment_density: f64,
    /// Dependency count above which consolidation is suggested.
    pub max_dependencies: usize,
    /// Maximum callables reported.
    pub max_functions: usize,
    pub large_file_lines: usize,
    pub max_quick_wins: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            max_cyclomatic: 10,
            min_comment_density: 0.12,
            max_dependencies: 5,
            max_functions: DEFAULT_MAX_FUNCTIONS,
            large_file_lines: 300,
            max_quick_wins: 3,
        }
    }
}

impl Thresholds {
    /// Check that every limit is usable, returning the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_comment_density) {
            return Err(format!(
                "min_comment_density must be within [0, 1], got {}",
                self.min_comment_density
            ));
        }
        if self.max_functions == 0 {
            return Err("max_functions must be at least 1".to_string());
        }
        if self.max_cyclomatic == 0 {
            return Err("max_cyclomatic must be at least 1".to_string());
        }
        if self.large_file_lines == 0 {
            return Err("large_file_lines must be at least 1".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Thresholds::default().validate().is_ok());
    }

    #[test]
    fn test_density_out_of_range() {
        let thresholds = Thresholds {
            min_comment_density: 1.5,
            ..Thresholds::default()
        };
        let err = thresholds.validate().unwrap_err();
        assert!(err.contains("min_comment_density"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let thresholds: Thresholds = serde_yaml::from_str("max_cyclomatic: 20\n").unwrap();
        assert_eq!(thresholds.max_cyclomatic, 20);
        assert_eq!(thresholds.max_quick_wins, 3);
    }
}
