/// Digit scripts
/// 数字书写系统，每个系统 10 个字符对应 0-9
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumeralSystem {
    /// 0123456789
    Arabic,
    /// ۰۱۲۳۴۵۶۷۸۹
    Persian,
    /// ٠١٢٣٤٥٦٧٨٩
    ArabicIndic,
    /// ০১২৩৪৫৬৭৮৯
    Bengali,
    /// ०१२३४५६७८९
    Devanagari,
    /// 〇一二三四五六七八九
    Chinese,
}

pub const ARABIC_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
pub const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
pub const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];
pub const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];
pub const CHINESE_DIGITS: [char; 10] = ['〇', '一', '二', '三', '四', '五', '六', '七', '八', '九'];

const ALL_SYSTEMS: [NumeralSystem; 6] = [
    NumeralSystem::Arabic,
    NumeralSystem::Persian,
    NumeralSystem::ArabicIndic,
    NumeralSystem::Bengali,
    NumeralSystem::Devanagari,
    NumeralSystem::Chinese,
];

impl NumeralSystem {
    pub fn name(&self) -> &'static str {
        match self {
            NumeralSystem::Arabic => "arabic",
            NumeralSystem::Persian => "persian",
            NumeralSystem::ArabicIndic => "arabic-indic",
            NumeralSystem::Bengali => "bengali",
            NumeralSystem::Devanagari => "devanagari",
            NumeralSystem::Chinese => "chinese",
        }
    }

    /// case-insensitive, `_` accepted in place of `-`
    pub fn from_name(name: &str) -> Option<NumeralSystem> {
        let name = name.trim().to_lowercase().replace('_', "-");
        ALL_SYSTEMS.iter().copied().find(|s| s.name() == name)
    }

    pub fn digits(&self) -> &'static [char; 10] {
        match self {
            NumeralSystem::Arabic => &ARABIC_DIGITS,
            NumeralSystem::Persian => &PERSIAN_DIGITS,
            NumeralSystem::ArabicIndic => &ARABIC_INDIC_DIGITS,
            NumeralSystem::Bengali => &BENGALI_DIGITS,
            NumeralSystem::Devanagari => &DEVANAGARI_DIGITS,
            NumeralSystem::Chinese => &CHINESE_DIGITS,
        }
    }

    /// value of `c` if it is a digit of this system
    pub fn value_of(&self, c: char) -> Option<usize> {
        self.digits().iter().position(|d| *d == c)
    }
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Numeral transliteration tools.
pub struct Numeral;

impl Numeral {
    /// Replace every ASCII digit in `s` with the digit of `system`; anything else is kept.
    pub fn to_system(s: &str, system: NumeralSystem) -> String {
        let target = system.digits();
        s.chars()
            .map(|c| match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => target[d as usize],
                _ => c,
            })
            .collect()
    }

    /// Replace the digit of any known script with its ASCII digit.
    pub fn to_english(s: &str) -> String {
        s.chars().map(Self::english_digit).collect()
    }

    /// Replace the digits of one specific script only.
    pub fn from_system(s: &str, system: NumeralSystem) -> String {
        s.chars()
            .map(|c| match system.value_of(c) {
                Some(v) => ARABIC_DIGITS[v],
                None => c,
            })
            .collect()
    }

    pub fn to_persian(s: &str) -> String {
        Self::to_system(s, NumeralSystem::Persian)
    }

    pub fn to_arabic_indic(s: &str) -> String {
        Self::to_system(s, NumeralSystem::ArabicIndic)
    }

    pub fn to_bengali(s: &str) -> String {
        Self::to_system(s, NumeralSystem::Bengali)
    }

    pub fn to_devanagari(s: &str) -> String {
        Self::to_system(s, NumeralSystem::Devanagari)
    }

    pub fn to_chinese(s: &str) -> String {
        Self::to_system(s, NumeralSystem::Chinese)
    }

    /// Which script, if any, `c` is a digit of. ASCII digits report `Arabic`.
    pub fn detect(c: char) -> Option<NumeralSystem> {
        ALL_SYSTEMS.iter().copied().find(|s| s.value_of(c).is_some())
    }

    fn english_digit(c: char) -> char {
        if c.is_ascii_digit() {
            return c;
        }
        ALL_SYSTEMS.iter().find_map(|s| s.value_of(c)).map(|v| ARABIC_DIGITS[v]).unwrap_or(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_persian() {
        assert_eq!(Numeral::to_persian("Tel: 0912-345"), "Tel: ۰۹۱۲-۳۴۵");
        assert_eq!(Numeral::to_english("Tel: ۰۹۱۲-۳۴۵"), "Tel: 0912-345");
    }

    #[test]
    fn test_each_script_roundtrip() {
        let digits = "0123456789";
        for system in ALL_SYSTEMS {
            let converted = Numeral::to_system(digits, system);
            assert_eq!(converted.chars().count(), 10);
            assert_eq!(Numeral::to_english(&converted), digits, "{}", system);
            assert_eq!(Numeral::from_system(&converted, system), digits);
        }
    }

    #[test]
    fn test_mixed_scripts() {
        assert_eq!(Numeral::to_english("১২ and ٣٤ and 五六 and ७"), "12 and 34 and 56 and 7");
        assert_eq!(Numeral::to_chinese("2024年"), "二〇二四年");
        assert_eq!(Numeral::to_bengali("৳ 50"), "৳ ৫০");
        assert_eq!(Numeral::to_devanagari("3.14"), "३.१४");
        assert_eq!(Numeral::to_arabic_indic("-7"), "-٧");
    }

    #[test]
    fn test_system_names() {
        assert_eq!(NumeralSystem::from_name("Arabic_Indic"), Some(NumeralSystem::ArabicIndic));
        assert_eq!(NumeralSystem::from_name("persian"), Some(NumeralSystem::Persian));
        assert_eq!(NumeralSystem::from_name("klingon"), None);
        assert_eq!(Numeral::detect('৫'), Some(NumeralSystem::Bengali));
        assert_eq!(Numeral::detect('x'), None);
    }
}
