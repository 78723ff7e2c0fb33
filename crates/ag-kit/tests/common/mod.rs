#![allow(dead_code)]
pub mod test_env;
pub mod tree;
