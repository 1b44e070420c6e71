//! Integration tests for loading and saving kubeconfig files without losing fields

use kubec::context::ContextSwitcher;
use kubec::kubeconfig::{codec, FileKubeconfigStore, KubeconfigStore};
use tempfile::TempDir;

use crate::integration::{write_kubeconfig, yaml_tree, BASIC_KUBECONFIG, FULL_KUBECONFIG};

#[test]
fn test_round_trip_keeps_every_field() {
    let temp = TempDir::new().unwrap();
    let path = write_kubeconfig(temp.path(), "config", FULL_KUBECONFIG);
    let before = yaml_tree(&path);

    let store = FileKubeconfigStore::new(&path);
    let loaded = store.load().unwrap();
    store.save(&loaded).unwrap();

    assert_eq!(yaml_tree(&path), before);
    assert_eq!(store.load().unwrap(), loaded);
}

#[test]
fn test_round_trip_without_exec_or_preferences() {
    let temp = TempDir::new().unwrap();
    let path = write_kubeconfig(temp.path(), "config", BASIC_KUBECONFIG);
    let before = yaml_tree(&path);

    let store = FileKubeconfigStore::new(&path);
    store.save(&store.load().unwrap()).unwrap();

    let after = yaml_tree(&path);
    assert_eq!(after, before);
    assert!(after.get("preferences").is_none());
}

#[test]
fn test_full_document_typed_fields() {
    let config = codec::from_yaml(FULL_KUBECONFIG).unwrap();

    let beta = &config.clusters[1].cluster;
    assert!(beta.insecure_skip_tls_verify);
    assert_eq!(beta.certificate_authority.as_deref(), Some("/etc/kube/beta-ca.crt"));

    let exec = config.users[4].user.exec.as_ref().unwrap();
    assert_eq!(exec.command.as_deref(), Some("aws"));
    assert_eq!(exec.args, vec!["eks", "get-token", "--cluster-name", "beta"]);
    assert_eq!(exec.env[0].name, "AWS_PROFILE");
    assert_eq!(exec.env[0].value, "prod");
    assert_eq!(exec.interactive_mode.as_deref(), Some("IfAvailable"));
    assert!(exec.provide_cluster_info);

    assert!(config.users[5].user.auth_provider.is_some());
    assert!(config.users[6].user.extra.contains_key("tokenFile"));
    assert!(config.clusters[0].cluster.extra.contains_key("proxy-url"));
    assert!(config.extra.contains_key("x-custom-top-level"));
}

#[test]
fn test_switch_changes_only_current_context() {
    let temp = TempDir::new().unwrap();
    let path = write_kubeconfig(temp.path(), "config", FULL_KUBECONFIG);
    let mut expected = yaml_tree(&path);
    expected["current-context"] = serde_yaml::Value::String("new-context".to_string());

    let store = FileKubeconfigStore::new(&path);
    ContextSwitcher::new(&store).switch_to("new-context").unwrap();

    assert_eq!(yaml_tree(&path), expected);
}

#[test]
fn test_switch_keeps_list_order() {
    let temp = TempDir::new().unwrap();
    let path = write_kubeconfig(temp.path(), "config", FULL_KUBECONFIG);
    let store = FileKubeconfigStore::new(&path);
    let before = store.load().unwrap();

    ContextSwitcher::new(&store).switch_to("new-context").unwrap();

    let after = store.load().unwrap();
    let names = |c: &kubec::kubeconfig::Kubeconfig| -> Vec<String> {
        c.users.iter().map(|u| u.name.clone()).collect()
    };
    assert_eq!(names(&after), names(&before));
    assert_eq!(after.contexts, before.contexts);
    assert_eq!(after.clusters, before.clusters);
}

#[test]
fn test_rendered_output_omits_empty_optionals() {
    let config = codec::from_yaml(BASIC_KUBECONFIG).unwrap();
    let rendered = codec::to_yaml(&config).unwrap();

    for absent in [
        "preferences",
        "exec",
        "auth-provider",
        "client-certificate",
        "username",
        "insecure-skip-tls-verify",
        "null",
        "''",
    ] {
        assert!(
            !rendered.contains(absent),
            "rendered kubeconfig should not contain {:?}:\n{}",
            absent,
            rendered
        );
    }
}
