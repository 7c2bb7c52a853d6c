/// [Reflected binary Gray code][gray] of `i`.
///
/// ```text
/// i -> i XOR (i >> 1)
/// ```
///
/// Consecutive indices map to codes differing in exactly one bit.
///
/// [gray]: https://en.wikipedia.org/wiki/Gray_code
pub fn gray(i: u32) -> u32 {
    i ^ (i >> 1)
}

/// Inverse of [`gray`]: the index whose Gray code is `g`.
pub fn gray_inverse(g: u32) -> u32 {
    let mut i = g;
    let mut shift = g >> 1;
    while shift != 0 {
        i ^= shift;
        shift >>= 1;
    }
    i
}

/// Returns true if `n` is a positive power of two.
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Base-2 logarithm of a power of two, or `None` for anything else.
pub fn log2_exact(n: usize) -> Option<u32> {
    if is_power_of_two(n) {
        Some(n.trailing_zeros())
    } else {
        None
    }
}

/// Powers of two `1, 2, 4, ...` up to and including `limit`.
pub fn powers_of_two(limit: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(1usize), |&p| p.checked_mul(2)).take_while(move |&p| p <= limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray() {
        // i     0   1   2   3   4   5   6   7
        // ------------------------------------
        // g   000 001 011 010 110 111 101 100
        let codes: Vec<u32> = (0..8).map(gray).collect();
        assert_eq!(codes, vec![0b000, 0b001, 0b011, 0b010, 0b110, 0b111, 0b101, 0b100]);
    }

    #[test]
    fn test_gray_adjacent_differ_in_one_bit() {
        for bits in 1..=5 {
            let n = 1u32 << bits;
            for i in 0..n {
                let j = (i + 1) % n;
                assert_eq!((gray(i) ^ gray(j)).count_ones(), 1, "i = {}, bits = {}", i, bits);
            }
        }
    }

    #[test]
    fn test_gray_inverse() {
        for i in 0..64 {
            assert_eq!(gray_inverse(gray(i)), i);
        }
    }

    #[test]
    fn test_log2_exact() {
        assert_eq!(log2_exact(1), Some(0));
        assert_eq!(log2_exact(2), Some(1));
        assert_eq!(log2_exact(32), Some(5));
        assert_eq!(log2_exact(0), None);
        assert_eq!(log2_exact(6), None);
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(16));
    }

    #[test]
    fn test_powers_of_two() {
        assert_eq!(powers_of_two(8).collect::<Vec<_>>(), vec![1, 2, 4, 8]);
        assert_eq!(powers_of_two(5).collect::<Vec<_>>(), vec![1, 2, 4]);
        assert_eq!(powers_of_two(1).collect::<Vec<_>>(), vec![1]);
    }
}
