//! Small functions used by the function and control-flow lessons.

pub fn add(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

pub fn max3(a: i32, b: i32, c: i32) -> i32 {
    let mut m = a;
    if b > m {
        m = b;
    }
    if c > m {
        m = c;
    }
    m
}

/// `n!` computed with a loop; wraps modulo 2^64 past `20!`.
pub fn fact_iter(n: u32) -> u64 {
    let mut r: u64 = 1;
    for i in 2..=u64::from(n) {
        r = r.wrapping_mul(i);
    }
    r
}

/// `n!` computed recursively.
pub fn fact_rec(n: u32) -> u64 {
    if n <= 1 {
        return 1;
    }
    u64::from(n).wrapping_mul(fact_rec(n - 1))
}

/// Absolute value; `i32::MIN` maps to itself as in two's complement C.
pub fn abs_i(x: i32) -> i32 {
    if x < 0 { x.wrapping_neg() } else { x }
}

pub fn is_even(x: i32) -> bool {
    x & 1 == 0
}

/// Clamp `x` into `[lo, hi]`, swapping the bounds if given reversed.
pub fn clamp(x: i32, mut lo: i32, mut hi: i32) -> i32 {
    if lo > hi {
        std::mem::swap(&mut lo, &mut hi);
    }
    if x < lo {
        lo
    } else if x > hi {
        hi
    } else {
        x
    }
}

pub fn sum_array(arr: &[i32]) -> i32 {
    let mut s = 0i32;
    let mut i = 0;
    while i < arr.len() {
        s = s.wrapping_add(arr[i]);
        i += 1;
    }
    s
}

pub fn swap(a: &mut i32, b: &mut i32) {
    std::mem::swap(a, b);
}

pub fn square(v: i32) -> i32 {
    v.wrapping_mul(v)
}

/// Day name for `1..=7`; 6 and 7 share `"Weekend"`, anything else is `"?"`.
pub fn day_name(day: i32) -> &'static str {
    match day {
        1 => "Mon",
        2 => "Tue",
        3 => "Wed",
        4 => "Thu",
        5 => "Fri",
        6 | 7 => "Weekend",
        _ => "?",
    }
}

/// The first `count` odd non-negative numbers, found by skipping evens
/// and stopping once enough have been seen.
pub fn first_odds(count: usize) -> Vec<i32> {
    let mut out = Vec::with_capacity(count);
    if count == 0 {
        return out;
    }
    let mut x = 0;
    loop {
        if x % 2 == 0 {
            x += 1;
            continue;
        }
        out.push(x);
        if out.len() == count {
            break;
        }
        x += 1;
    }
    out
}

/// Integer division with a precondition.
///
/// # Panics
///
/// Panics if `b` is zero.
pub fn divide_checked(a: i32, b: i32) -> i32 {
    assert!(b != 0, "b must not be zero");
    a / b
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn move_by(&mut self, dx: i32, dy: i32) {
        self.x = self.x.wrapping_add(dx);
        self.y = self.y.wrapping_add(dy);
    }
}

/// Free-function form of [`Point::move_by`], mutating through `&mut`.
pub fn move_point(p: &mut Point, dx: i32, dy: i32) {
    p.move_by(dx, dy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_helpers() {
        assert_eq!(add(2, 3), 5);
        assert_eq!(max3(7, -4, 5), 7);
        assert_eq!(max3(-1, -2, 0), 0);
        assert_eq!(abs_i(-42), 42);
        assert_eq!(abs_i(i32::MIN), i32::MIN);
        assert!(is_even(10));
        assert!(!is_even(-3));
        assert_eq!(square(6), 36);
    }

    #[test]
    fn clamp_handles_reversed_bounds() {
        assert_eq!(clamp(15, 0, 10), 10);
        assert_eq!(clamp(-5, 0, 10), 0);
        assert_eq!(clamp(5, 10, 0), 5);
        assert_eq!(clamp(50, 10, 0), 10);
    }

    #[test]
    fn factorials_agree() {
        assert_eq!(fact_iter(0), 1);
        assert_eq!(fact_iter(10), 3_628_800);
        assert_eq!(fact_rec(10), 3_628_800);
        assert_eq!(fact_iter(20), 2_432_902_008_176_640_000);
        assert_eq!(fact_iter(25), fact_rec(25));
    }

    #[test]
    fn sums_and_swap() {
        assert_eq!(sum_array(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(sum_array(&[]), 0);
        let (mut a, mut b) = (5, 9);
        swap(&mut a, &mut b);
        assert_eq!((a, b), (9, 5));
    }

    #[test]
    fn day_names_with_fallthrough() {
        let names: Vec<_> = (1..=8).map(day_name).collect();
        assert_eq!(
            names,
            ["Mon", "Tue", "Wed", "Thu", "Fri", "Weekend", "Weekend", "?"]
        );
        assert_eq!(day_name(0), "?");
    }

    #[test]
    fn odd_numbers() {
        assert_eq!(first_odds(10), [1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
        assert!(first_odds(0).is_empty());
    }

    #[test]
    fn point_moves() {
        let mut pt = Point { x: 1, y: 2 };
        move_point(&mut pt, 3, -1);
        assert_eq!(pt, Point { x: 4, y: 1 });
    }

    #[test]
    fn divide() {
        assert_eq!(divide_checked(8, 2), 4);
    }

    #[test]
    #[should_panic(expected = "b must not be zero")]
    fn divide_by_zero_panics() {
        divide_checked(1, 0);
    }
}
