//! Monotonic nonce generation

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Nonce units per second (microsecond resolution)
pub const NONCE_PRECISION: u64 = 1_000_000;

/// Last nonce handed out by this process
static LAST_NONCE: AtomicU64 = AtomicU64::new(0);

/// Generate a nonce for a signed request
///
/// The nonce is the current UTC time in microseconds since the unix epoch,
/// bumped past the previous value when the clock has not advanced (or went
/// backwards), so nonces are strictly increasing within the process.
pub fn generate_nonce() -> String {
    next_nonce(now_micros()).to_string()
}

fn now_micros() -> u64 {
    // A clock before 1970 degrades to the counter alone
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() * NONCE_PRECISION + u64::from(elapsed.subsec_micros()))
        .unwrap_or(0)
}

fn next_nonce(now: u64) -> u64 {
    let mut last = LAST_NONCE.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_NONCE.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(actual) => last = actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nonce_is_numeric() {
        let nonce = generate_nonce();
        assert!(!nonce.is_empty());
        assert!(nonce.chars().all(|c| c.is_ascii_digit()));
        assert!(nonce.parse::<u64>().is_ok());
    }

    #[test]
    fn test_nonce_strictly_increasing() {
        let mut previous: u64 = generate_nonce().parse().unwrap();
        for _ in 0..1000 {
            let current: u64 = generate_nonce().parse().unwrap();
            assert!(current > previous);
            previous = current;
        }
    }

    #[test]
    fn test_nonce_tracks_wall_clock() {
        let before = now_micros();
        let nonce: u64 = generate_nonce().parse().unwrap();
        assert!(nonce >= before);
        // microsecond resolution: 16 digits for any date this century
        assert_eq!(nonce.to_string().len(), 16);
    }

    #[test]
    fn test_stale_clock_still_advances() {
        let first = next_nonce(1);
        let second = next_nonce(1);
        assert!(second > first);
    }
}
