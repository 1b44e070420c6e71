//! Shared test utilities for integration tests
//!
//! Centralizes environment isolation and kubeconfig fixtures so tests that touch
//! `HOME`, `KUBECONFIG` or `XDG_CONFIG_HOME` do not race each other.

use kubec::config::UiConfig;
use kubec::kubeconfig::codec;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Global mutex to serialize environment variable access across all tests
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Minimal kubeconfig used by the switch scenarios.
pub const BASIC_KUBECONFIG: &str = r#"apiVersion: v1
kind: Config
current-context: old-context
contexts:
- name: old-context
  context:
    cluster: old-cluster
    user: old-user
- name: new-context
  context:
    cluster: new-cluster
    user: new-user
    namespace: apps
clusters:
- name: old-cluster
  cluster:
    server: https://old.example.com
- name: new-cluster
  cluster:
    server: https://new.example.com
users:
- name: old-user
  user:
    token: old-token
- name: new-user
  user:
    token: new-token
"#;

/// Kubeconfig exercising every modelled optional field plus keys the model does
/// not know about.
pub const FULL_KUBECONFIG: &str = r#"apiVersion: v1
kind: Config
current-context: old-context
preferences:
  colors: true
  extensions:
  - name: pref-ext
    extension:
      level: 3
contexts:
- name: old-context
  context:
    cluster: alpha
    user: token-user
    namespace: team-a
    extensions:
    - name: ctx-ext
      extension: {owner: platform}
- name: new-context
  context:
    cluster: beta
    user: exec-user
clusters:
- name: alpha
  cluster:
    server: https://alpha.example.com:6443
    certificate-authority-data: LS0tLS1CRUdJTg==
    proxy-url: http://proxy.example.com:3128
- name: beta
  cluster:
    server: https://beta.example.com
    certificate-authority: /etc/kube/beta-ca.crt
    insecure-skip-tls-verify: true
users:
- name: token-user
  user:
    token: abc.def.ghi
- name: cert-user
  user:
    client-certificate: /etc/kube/client.crt
    client-key: /etc/kube/client.key
- name: data-user
  user:
    client-certificate-data: Q0VSVA==
    client-key-data: S0VZ
- name: basic-user
  user:
    username: admin
    password: hunter2
- name: exec-user
  user:
    exec:
      apiVersion: client.authentication.k8s.io/v1beta1
      command: aws
      args:
      - eks
      - get-token
      - --cluster-name
      - beta
      env:
      - name: AWS_PROFILE
        value: prod
      interactiveMode: IfAvailable
      provideClusterInfo: true
- name: oidc-user
  user:
    auth-provider:
      name: oidc
      config:
        client-id: kubernetes
        idp-issuer-url: https://issuer.example.com
- name: token-file-user
  user:
    tokenFile: /var/run/secrets/token
x-custom-top-level:
  note: kept
"#;

/// Write `yaml` to `dir/name`, creating `dir` if needed.
pub fn write_kubeconfig(dir: &Path, name: &str, yaml: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, yaml).unwrap();
    path
}

/// `current-context` of the file at `path`, read through the codec.
pub fn current_context_of(path: &Path) -> Option<String> {
    codec::load(path)
        .unwrap()
        .current_context()
        .map(str::to_owned)
}

/// Parse a YAML file into an untyped tree for field-by-field comparison.
pub fn yaml_tree(path: &Path) -> serde_yaml::Value {
    serde_yaml::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// UI settings with color off so output can be compared literally.
pub fn plain_ui() -> UiConfig {
    UiConfig {
        color: false,
        ..Default::default()
    }
}

/// Run `f` with the given environment variables set (`Some`) or removed (`None`),
/// restoring the previous values afterwards.
///
/// Uses a global mutex to prevent race conditions in parallel test execution.
pub fn with_env<F, R>(vars: &[(&str, Option<&OsStr>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let saved: Vec<(String, Option<OsString>)> = vars
        .iter()
        .map(|(key, _)| (key.to_string(), std::env::var_os(key)))
        .collect();

    for (key, value) in vars {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }

    let result = f();

    for (key, value) in saved {
        match value {
            Some(value) => std::env::set_var(&key, value),
            None => std::env::remove_var(&key),
        }
    }

    result
}
