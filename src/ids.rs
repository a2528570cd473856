//! Task Id Generation
//!
//! Ids are the base-36 millisecond timestamp followed by five random
//! base-36 characters, e.g. `lq2x9k1a3f0zp`.

const SUFFIX_LEN: usize = 5;

/// Format a timestamp and a random fraction in [0, 1) as an id
pub fn format_id(now_ms: u64, random: f64) -> String {
    let mut id = to_base36(now_ms);
    let mut frac = random.clamp(0.0, 1.0 - f64::EPSILON);
    for _ in 0..SUFFIX_LEN {
        frac *= 36.0;
        let digit = frac.floor() as u32;
        frac -= digit as f64;
        id.push(std::char::from_digit(digit.min(35), 36).unwrap_or('0'));
    }
    id
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(std::char::from_digit((n % 36) as u32, 36).unwrap_or('0'));
        n /= 36;
    }
    digits.iter().rev().collect()
}

/// Fresh id from the clock and RNG of the current platform
pub fn generate_id() -> String {
    let (now, random) = entropy();
    format_id(now, random)
}

/// Fresh id not contained in `taken`
pub fn generate_unique_id<F: Fn(&str) -> bool>(taken: F) -> String {
    loop {
        let id = generate_id();
        if !taken(&id) {
            return id;
        }
        log::debug!("[IDS] collision on {}, regenerating", id);
    }
}

#[cfg(target_arch = "wasm32")]
fn entropy() -> (u64, f64) {
    (js_sys::Date::now() as u64, js_sys::Math::random())
}

#[cfg(not(target_arch = "wasm32"))]
fn entropy() -> (u64, f64) {
    use std::time::{SystemTime, UNIX_EPOCH};

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    // top 53 random bits of a v4 uuid as a fraction in [0, 1)
    let bits = (uuid::Uuid::new_v4().as_u128() >> 75) as u64;
    (now, bits as f64 / (1u64 << 53) as f64)
}
