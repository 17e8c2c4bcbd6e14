//! Define arithmetic operations on integers.

mod xgcd;

pub use xgcd::{xgcd_list, xgcd_pair};
