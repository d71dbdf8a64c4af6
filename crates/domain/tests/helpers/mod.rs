#![allow(dead_code)]
mod samples;

pub use samples::*;
