//! Money labels used by the digest and the dashboard.

/// Fixed-point rendering of a non-negative number where an exact tie rounds
/// up (`10.25` -> `10.3`), the way JavaScript's `toFixed` does. Rust's `{:.N}`
/// rounds exact ties to even; every other value already formats identically.
pub fn to_fixed(x: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let scaled = x * factor;
    // `scaled` can land on .5 by rounding; the fused check confirms x itself
    // sits exactly halfway between two representable labels.
    if scaled.fract() == 0.5 && x.mul_add(2.0 * factor, -2.0 * scaled) == 0.0 {
        return format!("{:.*}", decimals, scaled.ceil() / factor);
    }
    format!("{:.*}", decimals, x)
}

/// `$12.35M` style label for a USD amount.
pub fn millions_label(value: u64, decimals: usize) -> String {
    format!("${}M", to_fixed(value as f64 / 1e6, decimals))
}
