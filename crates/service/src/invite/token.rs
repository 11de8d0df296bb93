//! Invite code tokens: ULIDs from a monotonic generator.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use ulid::{Generator, Ulid};

use crate::errors::ServiceError;

static PROCESS_GENERATOR: Lazy<CodeGenerator> = Lazy::new(CodeGenerator::default);

/// Monotonic ULID source. Codes produced within one millisecond still sort in
/// generation order.
pub struct CodeGenerator {
    inner: Mutex<Generator>,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self { inner: Mutex::new(Generator::new()) }
    }
}

impl CodeGenerator {
    pub fn next_code(&self) -> Result<String, ServiceError> {
        let mut gen = self
            .inner
            .lock()
            .map_err(|_| ServiceError::Internal("code generator lock poisoned".into()))?;
        let ulid = gen
            .generate()
            .map_err(|e| ServiceError::Internal(format!("code generator exhausted: {e}")))?;
        Ok(ulid.to_string())
    }
}

/// Next code from the process-wide generator.
pub fn next_code() -> Result<String, ServiceError> {
    PROCESS_GENERATOR.next_code()
}

pub fn is_valid_code(code: &str) -> bool {
    Ulid::from_string(code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_valid_and_increasing() {
        let gen = CodeGenerator::default();
        let codes: Vec<String> = (0..500).map(|_| gen.next_code().unwrap()).collect();
        for c in &codes {
            assert_eq!(c.len(), 26);
            assert!(is_valid_code(c));
        }
        for pair in codes.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn shared_generator_is_monotonic_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..100).map(|_| next_code().unwrap()).collect::<Vec<_>>()))
            .collect();
        let mut all = Vec::new();
        for h in handles {
            let codes = h.join().unwrap();
            for pair in codes.windows(2) {
                assert!(pair[0] < pair[1]);
            }
            all.extend(codes);
        }
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 400);
    }

    #[test]
    fn rejects_non_ulids() {
        assert!(!is_valid_code("not-a-code"));
        assert!(!is_valid_code(""));
    }
}
