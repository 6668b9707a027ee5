use crate::erx::{Layouted, ResultE};
use crate::tools::predicate::Is;

/// Largest n whose factorial fits in u128.
pub const MAX_FACTORIAL: i64 = 34;

/// Number theory tools.
pub struct Theory;

/// Positional base conversion, bases 2..=36.
pub struct Base;

impl Theory {
    /// n! ; negative n or a result past u128 is an ARGS error
    pub fn factorial(n: i64) -> ResultE<u128> {
        if n < 0 {
            tracing::warn!("factorial rejected: negative input {}", n);
            return Err(Layouted::argument("THRY", "NEGF").erx("factorial of a negative number").add_extra("n", &n.to_string()));
        }
        if n > MAX_FACTORIAL {
            tracing::warn!("factorial rejected: {} overflows u128", n);
            return Err(Layouted::argument("THRY", "OVRF").erx("factorial overflows u128").add_extra("n", &n.to_string()));
        }
        Ok((2..=n as u128).product())
    }

    /// F(0) = 0, F(1) = 1; saturates at u128::MAX
    pub fn fibonacci(n: u32) -> u128 {
        let (mut a, mut b) = (0u128, 1u128);
        for _ in 0..n {
            let next = a.saturating_add(b);
            a = b;
            b = next;
        }
        a
    }

    /// first `count` fibonacci numbers starting at F(0)
    pub fn fibonacci_sequence(count: usize) -> Vec<u128> {
        let mut out = Vec::with_capacity(count);
        let (mut a, mut b) = (0u128, 1u128);
        for _ in 0..count {
            out.push(a);
            let next = a.saturating_add(b);
            a = b;
            b = next;
        }
        out
    }

    /// Euclid on absolute values, gcd(0, 0) = 0
    pub fn gcd(a: i64, b: i64) -> u64 {
        let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
        while b != 0 {
            let t = b;
            b = a % b;
            a = t;
        }
        a
    }

    /// 0 when either side is 0; saturates at u64::MAX
    pub fn lcm(a: i64, b: i64) -> u64 {
        if a == 0 || b == 0 {
            return 0;
        }
        let g = Self::gcd(a, b);
        (a.unsigned_abs() / g).saturating_mul(b.unsigned_abs())
    }

    /// gcd folded over a slice
    pub fn gcd_of(values: &[i64]) -> u64 {
        values.iter().fold(0u64, |acc, v| {
            let (mut a, mut b) = (acc, v.unsigned_abs());
            while b != 0 {
                let t = b;
                b = a % b;
                a = t;
            }
            a
        })
    }

    /// Prime factors with multiplicity, ascending. Empty for n < 2.
    pub fn prime_factors(n: u64) -> Vec<u64> {
        let mut out = Vec::new();
        let mut rest = n;
        let mut d = 2u64;
        while rest > 1 && d <= rest / d {
            while rest % d == 0 {
                out.push(d);
                rest /= d;
            }
            d += if d == 2 { 1 } else { 2 };
        }
        if rest > 1 {
            out.push(rest);
        }
        out
    }

    /// All positive divisors of n, ascending. Empty for 0.
    pub fn divisors(n: u64) -> Vec<u64> {
        if n == 0 {
            return Vec::new();
        }
        let mut low = Vec::new();
        let mut high = Vec::new();
        let mut i = 1u64;
        while i <= n / i {
            if n % i == 0 {
                low.push(i);
                if i != n / i {
                    high.push(n / i);
                }
            }
            i += 1;
        }
        low.extend(high.into_iter().rev());
        low
    }

    /// sum of proper divisors equals n
    pub fn is_perfect(n: u64) -> bool {
        if n < 2 {
            return false;
        }
        let proper: u64 = Self::divisors(n).iter().filter(|d| **d != n).sum();
        proper == n
    }

    pub fn is_perfect_square(n: i64) -> bool {
        if n < 0 {
            return false;
        }
        let n = n as u64;
        let root = integer_sqrt(n);
        root * root == n
    }

    pub fn is_perfect_cube(n: i64) -> bool {
        let abs = n.unsigned_abs();
        let mut root = (abs as f64).cbrt().round() as u64;
        // correct float drift around the candidate
        while root > 0 && root.checked_pow(3).map_or(true, |c| c > abs) {
            root -= 1;
        }
        while (root + 1).checked_pow(3).is_some_and(|c| c <= abs) {
            root += 1;
        }
        root.checked_pow(3) == Some(abs)
    }

    /// n! / (n - r)! ; 0 when r > n, saturates at u128::MAX
    pub fn permutations(n: u64, r: u64) -> u128 {
        if r > n {
            return 0;
        }
        let mut acc: u128 = 1;
        for i in 0..r {
            acc = acc.saturating_mul((n - i) as u128);
            if acc == u128::MAX {
                break;
            }
        }
        acc
    }

    /// n! / (r! (n - r)!) ; 0 when r > n, saturates at u128::MAX
    pub fn combinations(n: u64, r: u64) -> u128 {
        if r > n {
            return 0;
        }
        let r = r.min(n - r);
        let mut acc: u128 = 1;
        for i in 0..r {
            // acc = C(n, i); C(n, i) * (n - i) / (i + 1) is exact, so after removing
            // gcd(acc, i + 1) the rest of the divisor divides (n - i)
            let g = gcd_u128(acc, (i + 1) as u128);
            let factor = (n - i) as u128 / ((i + 1) as u128 / g);
            acc = match (acc / g).checked_mul(factor) {
                Some(v) => v,
                None => return u128::MAX,
            };
        }
        acc
    }

    /// primes <= limit, sieve of Eratosthenes
    pub fn primes_up_to(limit: usize) -> Vec<u64> {
        if limit < 2 {
            return Vec::new();
        }
        let mut composite = vec![false; limit + 1];
        let mut i = 2;
        while i * i <= limit {
            if !composite[i] {
                let mut j = i * i;
                while j <= limit {
                    composite[j] = true;
                    j += i;
                }
            }
            i += 1;
        }
        (2..=limit).filter(|k| !composite[*k]).map(|k| k as u64).collect()
    }

    /// Smallest prime strictly greater than n, `None` past the largest prime in i64.
    pub fn next_prime(n: i64) -> Option<i64> {
        let mut candidate = n.max(1).checked_add(1)?;
        while !Is::prime(candidate) {
            candidate = candidate.checked_add(1)?;
        }
        Some(candidate)
    }
}

impl Base {
    /// Convert the digits in `number` from base `from` to base `to`. A leading `-` is kept.
    ///
    /// # 示例
    /// ```
    /// use numkit::tools::theory::Base;
    /// assert_eq!(Base::convert("ff", 16, 2).unwrap(), "11111111");
    /// ```
    pub fn convert(number: &str, from: u32, to: u32) -> ResultE<String> {
        for base in [from, to] {
            if !(2..=36).contains(&base) {
                tracing::warn!("base convert rejected: base {}", base);
                return Err(Layouted::argument("BASE", "RADX").erx("base must be within 2..=36").add_extra("base", &base.to_string()));
            }
        }

        let (negative, digits) = split_sign(number);
        if digits.starts_with(['+', '-']) {
            tracing::warn!("base convert rejected: {:?} has a second sign", number);
            return Err(Layouted::argument("BASE", "SIGN")
                .erx("only one leading sign is allowed")
                .add_extra("number", number)
                .add_extra("base", &from.to_string()));
        }
        let value = u128::from_str_radix(digits, from).map_err(|e| {
            tracing::warn!("base convert rejected: {:?} in base {}: {}", number, from, e);
            Layouted::argument("BASE", "DIGT").erx(&e.to_string()).add_extra("number", number).add_extra("base", &from.to_string())
        })?;

        let body = to_radix(value, to);
        Ok(if negative && value != 0 { format!("-{}", body) } else { body })
    }

    pub fn to_binary(n: i64) -> String {
        signed(n, |v| format!("{:b}", v))
    }

    pub fn to_hex(n: i64) -> String {
        signed(n, |v| format!("{:x}", v))
    }

    pub fn to_octal(n: i64) -> String {
        signed(n, |v| format!("{:o}", v))
    }

    /// optional `-` then optional `0b`
    pub fn from_binary(s: &str) -> ResultE<i64> {
        Self::parse(s, 2, "0b")
    }

    /// optional `-` then optional `0x`
    pub fn from_hex(s: &str) -> ResultE<i64> {
        Self::parse(s, 16, "0x")
    }

    /// optional `-` then optional `0o`
    pub fn from_octal(s: &str) -> ResultE<i64> {
        Self::parse(s, 8, "0o")
    }

    fn parse(s: &str, radix: u32, prefix: &str) -> ResultE<i64> {
        let (negative, rest) = split_sign(s);
        let digits = match rest.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => &rest[prefix.len()..],
            _ => rest,
        };
        let signed_digits = if negative { format!("-{}", digits) } else { digits.to_string() };
        i64::from_str_radix(&signed_digits, radix).map_err(|e| {
            Layouted::argument("BASE", "DIGT").erx(&e.to_string()).add_extra("number", s).add_extra("base", &radix.to_string())
        })
    }
}

/// trimmed input split into (leading `-` present, rest)
fn split_sign(s: &str) -> (bool, &str) {
    let trimmed = s.trim();
    match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    }
}

fn gcd_u128(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

fn signed(n: i64, f: impl Fn(u64) -> String) -> String {
    if n < 0 {
        format!("-{}", f(n.unsigned_abs()))
    } else {
        f(n as u64)
    }
}

fn to_radix(mut value: u128, radix: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % radix as u128) as usize]);
        value /= radix as u128;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

fn integer_sqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}
