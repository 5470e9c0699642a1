//! Run-to-completion adapter for async handlers.
//!
//! Test-only: the calling thread blocks until the future finishes, with no
//! timeout. A hung handler hangs the caller.

use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Handle, Runtime};

use crate::error::HarnessError;

/// Owns a lazily started current-thread runtime.
///
/// The runtime is only created on the first blocking call, so a harness that
/// is only driven through async entry points never owns one. Dropping the
/// invoker shuts its runtime down in the background, so it may be dropped
/// from inside another runtime.
#[derive(Debug, Default)]
pub struct BlockingInvoker {
    runtime: OnceLock<Runtime>,
}

impl BlockingInvoker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive a future to completion on the calling thread.
    pub fn block_on<F: Future>(&self, future: F) -> Result<F::Output, HarnessError> {
        if Handle::try_current().is_ok() {
            return Err(HarnessError::NestedRuntime);
        }
        Ok(self.runtime()?.block_on(future))
    }

    fn runtime(&self) -> Result<&Runtime, HarnessError> {
        if let Some(runtime) = self.runtime.get() {
            return Ok(runtime);
        }

        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(HarnessError::Runtime)?;
        tracing::trace!("Blocking runtime started");
        Ok(self.runtime.get_or_init(|| runtime))
    }
}

impl Drop for BlockingInvoker {
    fn drop(&mut self) {
        // A plain Runtime drop blocks, which panics inside an async context
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
