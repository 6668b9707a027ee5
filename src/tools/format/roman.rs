/// value table, largest first, subtractive pairs included
pub const ROMAN_TABLE: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Roman numerals, 1..=3999
pub struct Roman;

impl Roman {
    /// Outside 1..=3999 the plain decimal string is returned.
    pub fn encode(n: i64) -> String {
        if !(1..4000).contains(&n) {
            return n.to_string();
        }

        let mut rest = n;
        let mut out = String::new();
        for (value, symbol) in ROMAN_TABLE {
            while rest >= value {
                out.push_str(symbol);
                rest -= value;
            }
        }
        out
    }

    /// Case-insensitive; characters that are not Roman digits count as 0.
    pub fn decode(s: &str) -> i64 {
        let values: Vec<i64> = s.chars().map(Self::value).collect();
        let mut total = 0;
        for (i, v) in values.iter().enumerate() {
            match values.get(i + 1) {
                Some(next) if v < next => total -= v,
                _ => total += v,
            }
        }
        total
    }

    pub fn value(c: char) -> i64 {
        match c.to_ascii_uppercase() {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(Roman::encode(1), "I");
        assert_eq!(Roman::encode(4), "IV");
        assert_eq!(Roman::encode(1994), "MCMXCIV");
        assert_eq!(Roman::encode(3999), "MMMCMXCIX");
        assert_eq!(Roman::encode(0), "0");
        assert_eq!(Roman::encode(4000), "4000");
        assert_eq!(Roman::encode(-7), "-7");
    }

    #[test]
    fn test_decode() {
        assert_eq!(Roman::decode("MCMXCIV"), 1994);
        assert_eq!(Roman::decode("mcmxciv"), 1994);
        assert_eq!(Roman::decode("XLII"), 42);
        assert_eq!(Roman::decode(""), 0);
        assert_eq!(Roman::decode("X?V"), 15);
    }

    #[test]
    fn test_roundtrip() {
        for n in 1..4000 {
            assert_eq!(Roman::decode(&Roman::encode(n)), n);
        }
    }
}
