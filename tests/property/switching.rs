//! Property-based tests for switching guarantees

use kubec::context::{ContextDirectory, ContextSwitcher};
use kubec::error::KubecError;
use kubec::kubeconfig::{Kubeconfig, MemoryKubeconfigStore, NamedContext};
use proptest::prelude::*;
use proptest::test_runner::TestRunner;

fn kubeconfig_with(names: &[String], current: &str) -> Kubeconfig {
    Kubeconfig {
        api_version: "v1".to_string(),
        kind: "Config".to_string(),
        current_context: current.to_string(),
        contexts: names
            .iter()
            .map(|name| NamedContext {
                name: name.clone(),
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    }
}

fn context_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z][a-zA-Z0-9._-]{0,12}", 1..8)
}

/// Switching to any declared context makes it the active one and saves once.
#[test]
fn test_switch_to_member_activates_it() {
    let mut runner = TestRunner::default();

    runner
        .run(&(context_names(), any::<prop::sample::Index>()), |(names, pick)| {
            let target = pick.get(&names).clone();
            let store = MemoryKubeconfigStore::new(kubeconfig_with(&names, &names[0]));

            let outcome = ContextSwitcher::new(&store).switch_to(&target).unwrap();

            prop_assert_eq!(&outcome.context, &target);
            prop_assert_eq!(outcome.changed, names[0] != target);
            prop_assert_eq!(store.save_count(), 1);
            let saved = store.snapshot();
            prop_assert_eq!(saved.current_context(), Some(target.as_str()));
            prop_assert_eq!(saved.contexts, kubeconfig_with(&names, "").contexts);
            Ok(())
        })
        .unwrap();
}

/// Names that are not declared are rejected without touching the store.
#[test]
fn test_switch_to_non_member_is_rejected() {
    let mut runner = TestRunner::default();

    runner
        .run(&(context_names(), "[a-zA-Z0-9._-]{1,14}"), |(names, requested)| {
            prop_assume!(!names.contains(&requested));
            let original = kubeconfig_with(&names, &names[0]);
            let store = MemoryKubeconfigStore::new(original.clone());

            let result = ContextSwitcher::new(&store).switch_to(&requested);

            prop_assert!(
                matches!(result, Err(KubecError::ContextNotFound(ref name)) if name == &requested)
            );
            prop_assert_eq!(store.save_count(), 0);
            prop_assert_eq!(store.snapshot(), original);
            Ok(())
        })
        .unwrap();
}

/// Listed names are the declared names, sorted, regardless of file order.
#[test]
fn test_listed_names_are_sorted_permutation() {
    let mut runner = TestRunner::default();

    runner
        .run(&context_names(), |names| {
            let store = MemoryKubeconfigStore::new(kubeconfig_with(&names, ""));

            let listed = ContextDirectory::new(&store).list_context_names().unwrap();

            let mut expected = names.clone();
            expected.sort();
            prop_assert_eq!(listed, expected);
            Ok(())
        })
        .unwrap();
}

/// A second switch to the same context leaves the document unchanged.
#[test]
fn test_switch_is_idempotent() {
    let mut runner = TestRunner::default();

    runner
        .run(&(context_names(), any::<prop::sample::Index>()), |(names, pick)| {
            let target = pick.get(&names).clone();
            let store = MemoryKubeconfigStore::new(kubeconfig_with(&names, ""));
            let switcher = ContextSwitcher::new(&store);

            switcher.switch_to(&target).unwrap();
            let after_first = store.snapshot();
            let second = switcher.switch_to(&target).unwrap();

            prop_assert!(!second.changed);
            prop_assert_eq!(store.snapshot(), after_first);
            Ok(())
        })
        .unwrap();
}
