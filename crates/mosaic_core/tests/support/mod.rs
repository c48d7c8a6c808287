#![allow(dead_code)]

pub mod fleet;
