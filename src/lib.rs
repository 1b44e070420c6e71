//! kubec: Kubernetes Context Switching
//!
//! Reads the kubeconfig, lists its contexts, and rewrites `current-context`
//! while leaving every other field of the document as it was.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod kubeconfig;
pub mod logging;
