pub mod bit_reverse;
pub mod domain;
