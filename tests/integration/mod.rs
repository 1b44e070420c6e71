//! Integration tests for kubeconfig handling, context switching and the CLI route

mod config_integration;
mod kubeconfig_roundtrip;
mod test_utils;

pub use test_utils::*;
