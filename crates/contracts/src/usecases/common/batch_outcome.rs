use serde::{Deserialize, Serialize};

/// Tally of a batch of independent requests (e.g. assigning several books
/// to a course). Succeeded items are kept even when others fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn from_results<T, E>(results: &[Result<T, E>]) -> Self {
        let mut outcome = Self::default();
        for r in results {
            outcome.record(r.is_ok());
        }
        outcome
    }

    pub fn record(&mut self, ok: bool) {
        if ok {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    /// "N correctos, M con error"
    pub fn summary(&self) -> String {
        format!("{} correctos, {} con error", self.succeeded, self.failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally() {
        let results: Vec<Result<(), String>> =
            vec![Ok(()), Err("409".into()), Ok(()), Ok(())];
        let outcome = BatchOutcome::from_results(&results);
        assert_eq!(outcome.succeeded, 3);
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.total(), 4);
        assert!(outcome.has_failures());
        assert_eq!(outcome.summary(), "3 correctos, 1 con error");
    }

    #[test]
    fn test_empty_batch() {
        let outcome = BatchOutcome::from_results::<(), ()>(&[]);
        assert_eq!(outcome, BatchOutcome::default());
        assert!(!outcome.has_failures());
    }
}
