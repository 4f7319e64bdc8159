// src/storage/id.rs
//
// Product ids: base-36 epoch millis + base-36 random tail, e.g. "m2x8k4q1a7f3kz0c9d".
// Unique enough for one person clicking buttons; not a security token.

use chrono::Utc;
use rand::Rng;

const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_TAIL: usize = 11;

pub fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return s!("0");
    }
    let mut buf = Vec::with_capacity(13);
    while n > 0 {
        buf.push(RADIX_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    buf.reverse();
    buf.into_iter().map(char::from).collect()
}

pub fn generate_unique_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let mut rng = rand::thread_rng();
    let tail: String = (0..RANDOM_TAIL)
        .map(|_| char::from(RADIX_DIGITS[rng.gen_range(0..36)]))
        .collect();
    join!(to_base36(millis), &tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base36_digits() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
    }

    #[test]
    fn ids_differ() {
        let a = generate_unique_id();
        let b = generate_unique_id();
        assert_ne!(a, b);
        assert!(a.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
