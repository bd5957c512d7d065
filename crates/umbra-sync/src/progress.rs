//! Progress reporting collaborator.
//!
//! The UI needs a loading bar per bulk fetch without the engine knowing
//! anything about rendering. That side channel is an explicit
//! collaborator: the assembler asks the [`ProgressReporter`] for one
//! listener per fetch category before the first network call, and passes
//! each listener into the corresponding [`RemoteStateSource`] operation.
//!
//! Listeners receive a completion fraction in `[0.0, 1.0]`, invoked at
//! least once per underlying page or batch, monotonically non-decreasing.
//! For calls that resume past a cached prefix, the fraction covers only
//! the newly fetched remainder -- resuming at an 80%-cached list still
//! reports 0 to 1 over the remaining 20%.
//!
//! [`RemoteStateSource`]: crate::source::RemoteStateSource

/// A completion-fraction callback handed to each bulk fetch.
pub type ProgressFn = Box<dyn Fn(f64) + Send + Sync>;

/// Produces one progress listener per labelled fetch category.
///
/// Implementations decide what a listener does: drive a terminal loading
/// bar, update a UI store, or nothing at all. The assembler registers all
/// listeners up front, so implementations can lay out their display before
/// any network traffic starts.
pub trait ProgressReporter {
    /// Create a listener for the fetch category named `label`.
    fn listener(&mut self, label: &str) -> ProgressFn;
}

/// A reporter whose listeners discard every fraction.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentProgress;

impl SilentProgress {
    /// Create a new silent reporter.
    pub const fn new() -> Self {
        Self
    }
}

impl ProgressReporter for SilentProgress {
    fn listener(&mut self, _label: &str) -> ProgressFn {
        Box::new(|_fraction| {})
    }
}

/// A reporter whose listeners log fractions through `tracing` at debug
/// level. Useful for headless runs and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl TracingProgress {
    /// Create a new tracing reporter.
    pub const fn new() -> Self {
        Self
    }
}

impl ProgressReporter for TracingProgress {
    fn listener(&mut self, label: &str) -> ProgressFn {
        let label = label.to_owned();
        Box::new(move |fraction| {
            tracing::debug!(label = %label, fraction, "fetch progress");
        })
    }
}
