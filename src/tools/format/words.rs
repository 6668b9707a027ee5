const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven", "twelve", "thirteen",
    "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = ["", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety"];

/// scale word per group of three digits; u64 tops out in the quintillions
const SCALES: [&str; 7] = ["", "thousand", "million", "billion", "trillion", "quadrillion", "quintillion"];

/// English spelled-out numbers.
pub struct Words;

impl Words {
    /// 0 -> "zero", 1234 -> "one thousand two hundred thirty-four", -5 -> "negative five"
    pub fn spell(n: i64) -> String {
        if n == 0 {
            return ONES[0].to_string();
        }
        let words = Self::spell_unsigned(n.unsigned_abs());
        if n < 0 {
            format!("negative {}", words)
        } else {
            words
        }
    }

    pub fn spell_unsigned(n: u64) -> String {
        if n == 0 {
            return ONES[0].to_string();
        }

        let mut groups = Vec::new();
        let mut rest = n;
        while rest > 0 {
            groups.push((rest % 1000) as usize);
            rest /= 1000;
        }

        let mut parts: Vec<String> = Vec::new();
        for (scale, group) in groups.iter().enumerate().rev() {
            if *group == 0 {
                continue;
            }
            let words = three_digits(*group);
            if SCALES[scale].is_empty() {
                parts.push(words);
            } else {
                parts.push(format!("{} {}", words, SCALES[scale]));
            }
        }
        parts.join(" ")
    }
}

/// 1..=999
fn three_digits(n: usize) -> String {
    let hundreds = n / 100;
    let rest = n % 100;

    let mut parts: Vec<String> = Vec::new();
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds]));
    }
    if rest > 0 {
        if rest < 20 {
            parts.push(ONES[rest].to_string());
        } else if rest % 10 == 0 {
            parts.push(TENS[rest / 10].to_string());
        } else {
            parts.push(format!("{}-{}", TENS[rest / 10], ONES[rest % 10]));
        }
    }
    parts.join(" ")
}
