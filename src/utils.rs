/// Compute the greatest common divisor of two signed integers as a
/// non-negative value. `gcd(0, 0)` is defined to be 0.
pub fn gcd_signed(mut a: i64, mut b: i64) -> i64 {
    let mut c;
    while a != 0 {
        c = a;
        // only wraps when i64::MIN % -1 and that still yields 0
        a = b.wrapping_rem(a);
        b = c;
    }
    b.unsigned_abs() as i64
}

#[cfg(test)]
mod test {
    use super::gcd_signed;

    #[test]
    fn gcd() {
        assert_eq!(gcd_signed(12, 18), 6);
        assert_eq!(gcd_signed(-12, 18), 6);
        assert_eq!(gcd_signed(12, -18), 6);
        assert_eq!(gcd_signed(7, 13), 1);
        assert_eq!(gcd_signed(0, 5), 5);
        assert_eq!(gcd_signed(5, 0), 5);
        assert_eq!(gcd_signed(0, 0), 0);
    }
}
