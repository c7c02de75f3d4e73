//! Display formatting helpers following es-CL conventions.
//!
//! Chart axis tick scaling (k / M) happens on the D3 side from format
//! tokens in the series config; these helpers cover everything rendered
//! from Rust: table cells, metric tiles and exported values.

/// Group digits with dots, the es-CL thousands convention: "45.230".
pub fn thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Chilean peso amount: "$1.800.000".
pub fn clp(value: u32) -> String {
    format!("${}", thousands(value))
}

/// One-decimal percentage: "8.0%".
pub fn percent1(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Signed one-decimal percentage: "+12.7%" / "-0.3%".
pub fn signed_percent1(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.1}%", value)
    } else {
        format!("{:.1}%", value)
    }
}

/// Thousands-scaled count: "545K".
pub fn compact_k(value: u32) -> String {
    format!("{}K", (value as f64 / 1_000.0).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_with_dots() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(950), "950");
        assert_eq!(thousands(45_230), "45.230");
        assert_eq!(thousands(1_800_000), "1.800.000");
    }

    #[test]
    fn clp_prefixes_peso_sign() {
        assert_eq!(clp(720_450), "$720.450");
        assert_eq!(clp(2_200_000), "$2.200.000");
    }

    #[test]
    fn percentages_keep_one_decimal() {
        assert_eq!(percent1(8.04), "8.0%");
        assert_eq!(signed_percent1(12.738), "+12.7%");
        assert_eq!(signed_percent1(-0.3), "-0.3%");
    }

    #[test]
    fn compact_scales_round() {
        assert_eq!(compact_k(545_000), "545K");
        assert_eq!(compact_k(45_230), "45K");
        assert_eq!(compact_k(45_900), "46K");
    }
}
