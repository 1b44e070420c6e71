//! Kubeconfig Document
//!
//! Locating, decoding and persisting the Kubernetes client configuration file.
//! The document is read fresh for every operation and written back whole; nothing
//! here caches state between invocations.

pub mod codec;
pub mod document;
pub mod locator;
pub mod store;

pub use document::{
    AuthInfo, ClusterInfo, ContextInfo, ExecConfig, ExecEnvVar, Kubeconfig, NamedAuthInfo,
    NamedCluster, NamedContext,
};
pub use store::{FileKubeconfigStore, KubeconfigStore, MemoryKubeconfigStore};
