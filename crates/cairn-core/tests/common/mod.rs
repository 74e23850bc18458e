//! Common test utilities for cairn-core
//!
//! Provides shared test infrastructure including:
//! - A sample resource built on `StandardComponent`
//! - Registrars that fail on demand
//! - Stack file fixtures

#![allow(dead_code)]

use cairn_core::registration::{RegistrationError, RegistrationRequest};
use cairn_core::{
    ComponentOptions, NamedLabeledResource, ResourceRegistrar, ResourceUrn, StandardComponent,
    StandardResourceArgs,
};
use camino::Utf8PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

/// Minimal concrete resource, the way downstream code declares one
pub struct TestComponent {
    component: StandardComponent,
}

impl TestComponent {
    pub const KIND: &'static str = "test:TestComponent";

    pub fn new<R: ResourceRegistrar + ?Sized>(
        registrar: &R,
        name: &str,
        args: &StandardResourceArgs,
    ) -> cairn_core::Result<Self> {
        Self::with_options(registrar, name, args, &ComponentOptions::new())
    }

    pub fn with_options<R: ResourceRegistrar + ?Sized>(
        registrar: &R,
        name: &str,
        args: &StandardResourceArgs,
        opts: &ComponentOptions,
    ) -> cairn_core::Result<Self> {
        let component = StandardComponent::new(registrar, Self::KIND, name, args, opts)?;
        Ok(Self { component })
    }
}

impl NamedLabeledResource for TestComponent {
    fn component(&self) -> &StandardComponent {
        &self.component
    }
}

/// Registrar that rejects every declaration and counts attempts
#[derive(Default)]
pub struct FailingRegistrar {
    pub attempts: AtomicUsize,
}

impl FailingRegistrar {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl ResourceRegistrar for FailingRegistrar {
    fn register(&self, request: RegistrationRequest<'_>) -> Result<ResourceUrn, RegistrationError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(RegistrationError::msg(format!(
            "backend refused {} '{}'",
            request.kind, request.name
        )))
    }
}

/// Write `Cairn.<stack>.yaml` into a fresh temp dir
pub fn write_stack_file(stack: &str, content: &str) -> (TempDir, Utf8PathBuf) {
    let temp = TempDir::new().unwrap();
    let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
    let path = dir.join(format!("Cairn.{}.yaml", stack));
    std::fs::write(&path, content).unwrap();
    (temp, path)
}
