use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::modules::editor::application::ports::outgoing::IdGenerator;

/// `prefix-<base36 epoch millis>`, e.g. `proj-lq2k9x1c`.
///
/// Two calls within the same millisecond get consecutive values.
#[derive(Debug, Default)]
pub struct TimestampIdGenerator {
    last: AtomicI64,
}

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_tick(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(actual) => last = actual,
            }
        }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn generate(&self, prefix: &str) -> String {
        format!("{prefix}-{}", to_base36(self.next_tick()))
    }
}

fn to_base36(value: i64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

    let mut n = value.unsigned_abs();
    if n == 0 {
        return "0".to_string();
    }

    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn test_generate_uses_prefix() {
        let ids = TimestampIdGenerator::new();
        let id = ids.generate("proj");

        let suffix = id.strip_prefix("proj-").expect("prefixed id");
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_consecutive_ids_are_distinct() {
        let ids = TimestampIdGenerator::new();
        let generated: Vec<String> = (0..50).map(|_| ids.generate("gal")).collect();

        let mut unique = generated.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), generated.len());
    }
}
