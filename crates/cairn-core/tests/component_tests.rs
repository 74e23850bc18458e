//! Component declaration integration tests
//!
//! Exercises resources built on `StandardComponent`:
//! - Name prefix and label derivation
//! - Child naming
//! - Registration and failure propagation

mod common;

use cairn_core::labels::MANAGED_BY;
use cairn_core::{
    ComponentOptions, Error, NamedLabeledResource, RecordingRegistrar, StandardResourceArgs,
};
use common::*;
use std::collections::BTreeMap;

fn labels_of(resource: &dyn NamedLabeledResource) -> BTreeMap<String, String> {
    resource.labels().clone().into()
}

#[test]
fn test_creates_name_prefix_from_project_environment_and_name() {
    let registrar = RecordingRegistrar::new("dev", "lib");
    let component = TestComponent::new(
        &registrar,
        "mybucket",
        &StandardResourceArgs::new("myapp", "dev", "team-infra"),
    )
    .unwrap();

    assert_eq!(component.name_prefix(), "myapp-dev-mybucket");
}

#[test]
fn test_creates_standard_labels_with_managed_by_tag() {
    let registrar = RecordingRegistrar::new("prod", "lib");
    let component = TestComponent::new(
        &registrar,
        "mybucket",
        &StandardResourceArgs::new("myapp", "prod", "team-platform"),
    )
    .unwrap();

    let expected: BTreeMap<String, String> = [
        ("project", "myapp"),
        ("environment", "prod"),
        ("owner", "team-platform"),
        ("managed-by", MANAGED_BY),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    assert_eq!(labels_of(&component), expected);
}

#[test]
fn test_generates_child_names_with_suffix() {
    let registrar = RecordingRegistrar::new("staging", "lib");
    let component = TestComponent::new(
        &registrar,
        "myservice",
        &StandardResourceArgs::new("app", "staging", "ops"),
    )
    .unwrap();

    assert_eq!(component.child_name("logs"), "app-staging-myservice-logs");
}

#[test]
fn test_managed_by_is_constant_across_inputs() {
    let registrar = RecordingRegistrar::new("dev", "lib");
    let identities = [
        ("alpha", "dev", "a"),
        ("BETA", "Prod", "b"),
        ("", "", ""),
    ];

    for (idx, (project, env, owner)) in identities.iter().enumerate() {
        let component = TestComponent::new(
            &registrar,
            &format!("svc{}", idx),
            &StandardResourceArgs::new(*project, *env, *owner),
        )
        .unwrap();
        assert_eq!(component.labels().get("managed-by"), Some(MANAGED_BY));
        assert_eq!(component.labels().len(), 4);
    }
}

#[test]
fn test_components_do_not_share_state() {
    let registrar = RecordingRegistrar::new("dev", "lib");
    let a = TestComponent::new(
        &registrar,
        "api",
        &StandardResourceArgs::new("shop", "dev", "web"),
    )
    .unwrap();
    let b = TestComponent::new(
        &registrar,
        "worker",
        &StandardResourceArgs::new("shop", "prod", "batch"),
    )
    .unwrap();

    assert_eq!(a.name_prefix(), "shop-dev-api");
    assert_eq!(b.name_prefix(), "shop-prod-worker");
    assert_eq!(a.labels().owner(), "web");
    assert_eq!(b.labels().owner(), "batch");
    assert_ne!(a.urn(), b.urn());
}

#[test]
fn test_nested_component_uses_parent_options() {
    let registrar = RecordingRegistrar::new("dev", "lib");
    let identity = StandardResourceArgs::new("app", "dev", "ops");

    let parent = TestComponent::new(&registrar, "platform", &identity).unwrap();
    let child = TestComponent::with_options(
        &registrar,
        &parent.child_name("cache"),
        &identity,
        &parent.component().child_options(),
    )
    .unwrap();

    assert_eq!(child.urn().name(), "app-dev-platform-cache");
    assert_eq!(
        child.urn().qualified_type(),
        "test:TestComponent$test:TestComponent"
    );
    assert_eq!(child.name_prefix(), "app-dev-app-dev-platform-cache");
}

#[test]
fn test_registration_failure_is_propagated_unchanged() {
    let registrar = FailingRegistrar::default();
    let result = TestComponent::new(
        &registrar,
        "mybucket",
        &StandardResourceArgs::new("myapp", "dev", "team-infra"),
    );

    let err = match result {
        Ok(_) => panic!("registration should have failed"),
        Err(err) => err,
    };
    assert!(matches!(err, Error::Registration(_)));
    assert_eq!(
        err.to_string(),
        "backend refused test:TestComponent 'mybucket'"
    );
    assert_eq!(registrar.attempts(), 1);
}

#[test]
fn test_duplicate_declaration_fails() {
    let registrar = RecordingRegistrar::new("dev", "lib");
    let identity = StandardResourceArgs::new("myapp", "dev", "team-infra");

    TestComponent::new(&registrar, "mybucket", &identity).unwrap();
    let second = TestComponent::with_options(
        &registrar,
        "mybucket",
        &identity,
        &ComponentOptions::new(),
    );

    assert!(matches!(second, Err(Error::Registration(_))));
    assert_eq!(registrar.len(), 1);
}
