pub use crate::erx::{Erx, Layouted, PreL4, ResultE, ResultEX};
pub use crate::tools::arith::Arith;
pub use crate::tools::extract::Extract;
pub use crate::tools::format::{Duration, Fmt, Roman, Words};
pub use crate::tools::interp::Interp;
pub use crate::tools::number::StrC;
pub use crate::tools::numeral::{Numeral, NumeralSystem};
pub use crate::tools::predicate::Is;
pub use crate::tools::rand::Random;
pub use crate::tools::stats::Stats;
pub use crate::tools::theory::{Base, Theory};
pub use crate::tools::trig::{Log, Trig};
