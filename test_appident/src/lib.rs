#![doc = include_str!("../README.md")]
#![cfg_attr(test, deny(warnings))]
