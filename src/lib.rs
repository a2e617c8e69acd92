#![doc = include_str!("../README.md")]
#![cfg_attr(feature = "bench", feature(test))]

#[cfg(feature = "bench")]
extern crate test;

mod error;
mod matrix;
mod ops;

pub use error::{Error, Result};
pub use matrix::Matrix;
pub use ops::{conv1d, multiply};
