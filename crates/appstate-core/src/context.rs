//! # Host-Context Capability
//!
//! The host framework that launches the application owns the real context
//! object (package identity, package manager, resources). The core never
//! talks to that object directly; it goes through the [`ContextProvider`]
//! capability seam, which any harness can satisfy with [`FakeContext`].
//!
//! [`probe`] is the read-only health check over a provider: it verifies the
//! package name is non-empty and that both capability handles are present,
//! and reports exactly what is missing otherwise.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// CAPABILITY SEAM
// =============================================================================

/// Injected capability over the host application context.
///
/// Implementors must be cheap to call: every method is a read-only probe
/// with no side effects.
pub trait ContextProvider {
    /// The package identifier of the application under test.
    fn package_name(&self) -> &str;

    /// Whether a package-manager handle is available.
    fn has_package_manager(&self) -> bool;

    /// Whether a resources handle is available.
    fn has_resources(&self) -> bool;
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Failures a context probe can report.
///
/// Each variant names the single capability that was found missing, so a
/// failing harness run states precisely what the host did not provide.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    /// The host reported an empty package name.
    #[error("package name is empty")]
    EmptyPackageName,

    /// The host context has no package-manager handle.
    #[error("package manager is unavailable")]
    PackageManagerUnavailable,

    /// The host context has no resources handle.
    #[error("resources are unavailable")]
    ResourcesUnavailable,

    /// The package name differs from the fixed identifier the harness expects.
    #[error("package name mismatch: expected `{expected}`, got `{actual}`")]
    PackageMismatch {
        /// The identifier the harness was configured for.
        expected: String,
        /// The identifier the host actually reported.
        actual: String,
    },
}

// =============================================================================
// PROBE
// =============================================================================

/// Snapshot of a successful context probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextReport {
    /// The non-empty package identifier the host reported.
    pub package_name: String,
    /// Package-manager handle was present.
    pub package_manager: bool,
    /// Resources handle was present.
    pub resources: bool,
}

/// Probe a provider for the capabilities every application run requires.
///
/// Checks, in order: non-empty package name, package-manager handle,
/// resources handle. The first missing capability is the error returned.
pub fn probe(provider: &impl ContextProvider) -> Result<ContextReport, ContextError> {
    let package_name = provider.package_name();
    if package_name.is_empty() {
        return Err(ContextError::EmptyPackageName);
    }
    if !provider.has_package_manager() {
        return Err(ContextError::PackageManagerUnavailable);
    }
    if !provider.has_resources() {
        return Err(ContextError::ResourcesUnavailable);
    }

    Ok(ContextReport {
        package_name: package_name.to_string(),
        package_manager: true,
        resources: true,
    })
}

/// Probe a provider and additionally require an exact package identifier.
pub fn probe_expecting(
    provider: &impl ContextProvider,
    expected: &str,
) -> Result<ContextReport, ContextError> {
    let report = probe(provider)?;
    if report.package_name != expected {
        return Err(ContextError::PackageMismatch {
            expected: expected.to_string(),
            actual: report.package_name,
        });
    }
    Ok(report)
}

// =============================================================================
// RELAXED FAKE
// =============================================================================

/// Hand-written relaxed stand-in for a host context.
///
/// "Relaxed" as in: anything a caller does not configure answers with a
/// present, non-empty default instead of failing. This replaces a
/// reflection-based mocking framework with a plain value type any test
/// harness can construct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeContext {
    package_name: String,
    package_manager: bool,
    resources: bool,
}

impl Default for FakeContext {
    fn default() -> Self {
        Self {
            package_name: "com.example.placeholder".to_string(),
            package_manager: true,
            resources: true,
        }
    }
}

impl FakeContext {
    /// A relaxed fake with every capability present and a placeholder name.
    #[must_use]
    pub fn relaxed() -> Self {
        Self::default()
    }

    /// A relaxed fake reporting the given package name.
    #[must_use]
    pub fn with_package_name(name: impl Into<String>) -> Self {
        Self {
            package_name: name.into(),
            ..Self::default()
        }
    }

    /// Override the package-manager capability.
    #[must_use]
    pub fn package_manager(mut self, available: bool) -> Self {
        self.package_manager = available;
        self
    }

    /// Override the resources capability.
    #[must_use]
    pub fn resources(mut self, available: bool) -> Self {
        self.resources = available;
        self
    }
}

impl ContextProvider for FakeContext {
    fn package_name(&self) -> &str {
        &self.package_name
    }

    fn has_package_manager(&self) -> bool {
        self.package_manager
    }

    fn has_resources(&self) -> bool {
        self.resources
    }
}

// =============================================================================
// TESTS
// =============================================================================
