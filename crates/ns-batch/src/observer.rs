//! Batch observer trait for progress reporting.

use ns_core::RouteId;

/// Error type returned by a failing progress hook.
pub type ObserverError = Box<dyn std::error::Error + Send + Sync>;

/// Callbacks invoked by [`BatchRouter::run`][crate::BatchRouter::run] as
/// routes are processed.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  Observers are advisory: a failing
/// [`on_progress`](Self::on_progress) is logged and the batch continues.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl ProgressObserver for ProgressPrinter {
///     fn on_progress(&mut self, completed: usize, total: usize) -> Result<(), ObserverError> {
///         println!("{completed}/{total} routes");
///         Ok(())
///     }
/// }
/// ```
pub trait ProgressObserver {
    /// Called before route number `index` (0-based) is matched.
    fn on_route_start(&mut self, _index: usize, _route: &RouteId) {}

    /// Called once after each completed route.
    ///
    /// `completed` counts finished routes (1-based); `total` is the batch size.
    fn on_progress(&mut self, _completed: usize, _total: usize) -> Result<(), ObserverError> {
        Ok(())
    }

    /// Called once after the last route, only when the batch succeeded.
    fn on_batch_end(&mut self, _routes: usize) {}
}

/// A [`ProgressObserver`] that does nothing.
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {}

/// Adapts a `FnMut(completed, total)` closure into a [`ProgressObserver`].
///
/// ```
/// use ns_batch::{ProgressFn, ProgressObserver};
///
/// let mut seen = Vec::new();
/// let mut obs = ProgressFn(|done, total| seen.push((done, total)));
/// obs.on_progress(1, 2).unwrap();
/// drop(obs);
/// assert_eq!(seen, [(1, 2)]);
/// ```
pub struct ProgressFn<F: FnMut(usize, usize)>(pub F);

impl<F: FnMut(usize, usize)> ProgressObserver for ProgressFn<F> {
    fn on_progress(&mut self, completed: usize, total: usize) -> Result<(), ObserverError> {
        (self.0)(completed, total);
        Ok(())
    }
}
