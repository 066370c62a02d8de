use super::*;

#[test]
fn lerp_endpoints_and_midpoint() {
    assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
    assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
    assert_eq!(lerp(2.0, 6.0, 0.5), 4.0);
}

#[test]
fn recip_or_zero_guards_empty_accumulation() {
    assert_eq!(recip_or_zero(0.0), 0.0);
    assert_eq!(recip_or_zero(-1.0), 0.0);
    assert!((recip_or_zero(4.0) - 0.25).abs() < 1e-7);
}
