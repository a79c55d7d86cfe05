#![cfg_attr(not(test), no_std)]

//! Bit-banged driver for serial-in/parallel-out shift registers such as the
//! SN74HC595, MBI5027 or MBI5168. Chains of any length are driven through
//! three or four output lines.

mod error;
pub mod line;
mod shift;

pub use error::{ConfigurationError, Error, LineRole};
pub use line::{Line, OutputLine, Polarity};
pub use shift::{BitOrder, Builder, ShiftRegister};
