/// Layouted: 预设好的一些Layout快速方法
/// ResultE<T> = Result<T, Erx>;
/// ResultEX = ResultE<()>;
/// fn smp<T: ToString>(error: T) -> Erx
/// fn amp<T: ToString>(additional: &str) -> impl Fn(T) -> Erx
use crate::conf;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

lazy_static! {
    static ref APP_SHORT: String = conf::numkit().read().map(|r| r.short.clone()).unwrap_or_else(|_| "NUMK".to_string());
}

/// Zero
pub static LAYOUTED_C_ZERO: &'static str = "0000";

/// ResultE<T> = Result<T, Erx>;
pub type ResultE<T> = Result<T, Erx>;

/// ResultEX = ResultE<()>;
pub type ResultEX = ResultE<()>;

/// Layouted: Some predefined Layouted methods
pub struct Layouted;

pub fn describe_error(e: &dyn std::error::Error) -> String {
    let mut description = e.to_string();
    let mut current = e.source();
    while let Some(source) = current {
        description.push_str(&format!("\nCaused by: {}", source));
        current = source.source();
    }
    description
}

/// emp: error message processor
/// 将标准错误转换为 Erx，完整错误链放在 extra 的 "ORIGIN" 中
pub fn emp<T: std::error::Error>(error: T) -> Erx {
    let extra = vec![(String::from("ORIGIN"), describe_error(&error))];
    let message = error.to_string();
    Erx { code: Default::default(), message, extra }
}

/// smp: simple convert T: ToString to Erx
pub fn smp<T: ToString>(error: T) -> Erx {
    Erx { code: Default::default(), message: error.to_string(), extra: Vec::new() }
}

/// amp: return a function that convert T: ToString to Erx, message prefixed by `additional`
///
/// # 示例
/// ```
/// let to_erx = numkit::erx::amp::<&str>("base convert");
/// let error = to_erx("invalid digit");
/// assert_eq!(error.message(), "base convert : invalid digit");
/// ```
pub fn amp<T: ToString>(additional: &str) -> impl Fn(T) -> Erx {
    let additional = additional.to_string();
    move |err: T| Erx { code: Default::default(), message: format!("{} : {}", additional, err.to_string()), extra: Vec::new() }
}

/// Predefined Layouted Code with length 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreL4 {
    /// Fuzz: 模糊错误
    FUZZ,
    /// Common: 通用错误
    COMM,
    /// Arguments: 参数不合法
    ARGS,
    /// Random: 随机源不可用
    RAND,
    /// Undefined: 未定义错误
    UNDF,
    OTHE,
}

impl PreL4 {
    pub fn four(&self) -> &'static str {
        match self {
            PreL4::FUZZ => "FUZZ",
            PreL4::COMM => "COMM",
            PreL4::ARGS => "ARGS",
            PreL4::RAND => "RAND",
            PreL4::UNDF => "UNDF",
            PreL4::OTHE => "OTHE",
        }
    }

    pub fn from_str(s: &str) -> Option<PreL4> {
        match s.to_uppercase().as_str() {
            "FUZZ" => Some(PreL4::FUZZ),
            "COMM" => Some(PreL4::COMM),
            "ARGS" => Some(PreL4::ARGS),
            "RAND" => Some(PreL4::RAND),
            "UNDF" => Some(PreL4::UNDF),
            "OTHE" => Some(PreL4::OTHE),
            _ => None,
        }
    }

    pub fn layoutc(&self, category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(self.four(), category, detail)
    }
}

impl Display for PreL4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.four())
    }
}

impl From<&str> for PreL4 {
    fn from(s: &str) -> Self {
        PreL4::from_str(s).unwrap_or(PreL4::OTHE)
    }
}

impl From<PreL4> for String {
    fn from(value: PreL4) -> Self {
        value.four().to_string()
    }
}

impl Layouted {
    /// fuzz_udf: 模糊未定义错误
    pub fn fuzz_udf(detail: &str) -> LayoutedC {
        LayoutedC::new(PreL4::FUZZ.four(), PreL4::UNDF.four(), detail)
    }

    /// common: 通用错误
    pub fn common(category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(PreL4::COMM.four(), category, detail)
    }

    /// argument: 参数错误 (除零、负数阶乘、位数范围非法 ...)
    pub fn argument(category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(PreL4::ARGS.four(), category, detail)
    }

    /// random: 随机源错误
    pub fn random(category: &str, detail: &str) -> LayoutedC {
        LayoutedC::new(PreL4::RAND.four(), category, detail)
    }
}

/// Code code format
/// aaaa-xxxx-yyyy-zzzz
///
///    aaaa : 应用标示，建议4位长度
///    xxxx : 错误大类，见 PreL4
///    yyyy : 子类，通常是出错的工具分组，如 ARIT / THRY / RAND
///    zzzz : 具体错误
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LayoutedC {
    pub application: String,
    pub domain: String,
    pub category: String,
    pub detail: String,
}

impl LayoutedC {
    pub fn okay() -> LayoutedC {
        LayoutedC {
            application: APP_SHORT.clone(),
            domain: LAYOUTED_C_ZERO.into(),
            category: LAYOUTED_C_ZERO.into(),
            detail: LAYOUTED_C_ZERO.into(),
        }
    }

    pub fn new(domain: &str, category: &str, detail: &str) -> LayoutedC {
        LayoutedC { application: APP_SHORT.clone(), domain: domain.into(), category: category.into(), detail: detail.into() }
    }

    pub fn is_okc(&self) -> bool {
        self.domain.replace("0", "").is_empty() && self.category.replace("0", "").is_empty() && self.detail.replace("0", "").is_empty()
    }

    pub fn layout_string(&self) -> String {
        format!("{}-{}-{}-{}", self.application, self.domain, self.category, self.detail)
    }

    /// build an Erx with this code and message
    pub fn erx(self, message: &str) -> Erx {
        Erx { code: self, message: message.to_string(), extra: Vec::new() }
    }

    pub fn get_app(&self) -> &str {
        &self.application
    }

    pub fn get_domain(&self) -> &str {
        &self.domain
    }

    pub fn get_category(&self) -> &str {
        &self.category
    }

    pub fn get_detail(&self) -> &str {
        &self.detail
    }
}

impl Default for LayoutedC {
    fn default() -> Self {
        LayoutedC { application: APP_SHORT.clone(), domain: PreL4::UNDF.into(), category: PreL4::UNDF.into(), detail: PreL4::UNDF.into() }
    }
}

impl From<LayoutedC> for String {
    fn from(value: LayoutedC) -> Self {
        value.layout_string()
    }
}

impl From<String> for LayoutedC {
    fn from(value: String) -> Self {
        let mut c = LayoutedC::default();
        let parts: Vec<&str> = value.split("-").collect();
        if let Some(application) = parts.first() {
            c.application = application.to_string();
        }
        if let Some(domain) = parts.get(1) {
            c.domain = domain.to_string();
        }
        if let Some(category) = parts.get(2) {
            c.category = category.to_string();
        }
        if let Some(detail) = parts.get(3) {
            c.detail = detail.to_string();
        }
        c
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Erx {
    code: LayoutedC,
    message: String,
    extra: Vec<(String, String)>,
}

impl Erx {
    pub fn new(message: &str) -> Erx {
        Erx { code: Default::default(), message: message.to_string(), extra: Vec::new() }
    }

    pub fn code(&self) -> LayoutedC {
        self.code.clone()
    }

    pub fn code_mut(&mut self) -> &mut LayoutedC {
        &mut self.code
    }

    /// whether this error belongs to the given domain
    pub fn is(&self, domain: PreL4) -> bool {
        self.code.domain == domain.four()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn description(&self) -> String {
        let mut description = self.code.layout_string();
        description.push(' ');
        description.push_str(&self.message);
        if self.extra.is_empty() {
            return description;
        }

        description.push_str(" { ");

        self.extra.iter().for_each(|x| {
            description.push_str(&format!("{}={} ,", x.0, x.1));
        });

        description.remove(description.len() - 1);
        description.push_str(" }");

        description
    }

    pub fn extra(&self) -> &Vec<(String, String)> {
        &self.extra
    }

    /// get extra value, if not exists, return None
    pub fn extra_val(&self, key: &str) -> Option<String> {
        self.extra.iter().find(|e| e.0.eq(key)).map(|e| e.1.clone())
    }

    /// add extra
    /// if key exists, replace value
    pub fn add_extra(mut self, key: &str, value: &str) -> Self {
        match self.extra.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.extra.push((key.to_string(), value.to_string())),
        }
        self
    }

    /// get extra and convert to HashMap
    /// if have same key, the last value will be used
    pub fn extra_map(&self) -> HashMap<String, String> {
        HashMap::from_iter(self.extra.clone())
    }
}

impl Display for Erx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", serde_json::to_string(&self).unwrap_or_default())
    }
}

impl std::error::Error for Erx {}

impl From<&str> for Erx {
    fn from(s: &str) -> Self {
        s.to_string().into()
    }
}

impl From<String> for Erx {
    fn from(str: String) -> Erx {
        if str.is_empty() {
            return Erx::default();
        }

        serde_json::from_str(&str).unwrap_or_else(|_| Erx::new(&str))
    }
}

impl From<(LayoutedC, &str)> for Erx {
    fn from((code, message): (LayoutedC, &str)) -> Self {
        code.erx(message)
    }
}
