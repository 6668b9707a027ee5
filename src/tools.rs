pub mod arith;
pub mod extract;
pub mod format;
pub mod interp;
pub mod number;
pub mod numeral;
pub mod predicate;
pub mod rand;
pub mod stats;
pub mod theory;
pub mod trig;

#[cfg(test)]
pub mod tests;
