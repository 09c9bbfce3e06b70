//! Tokio runtime and mock paper server helpers for behavioural tests.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use rstest_bdd::Slot;
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// Runtime handle that can live in an `rstest-bdd` Slot.
#[derive(Clone)]
pub struct SharedRuntime(Rc<RefCell<Runtime>>);

impl SharedRuntime {
    pub fn new(runtime: Runtime) -> Self {
        Self(Rc::new(RefCell::new(runtime)))
    }

    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.0.borrow().block_on(future)
    }
}

/// Returns the scenario runtime, creating it on first use.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub fn ensure_runtime(runtime: &Slot<SharedRuntime>) -> Result<SharedRuntime, io::Error> {
    if let Some(existing) = runtime.get() {
        return Ok(existing);
    }
    let created = SharedRuntime::new(Runtime::new()?);
    runtime.set(created.clone());
    Ok(created)
}

/// Starts a mock paper server on the scenario runtime.
///
/// # Errors
///
/// Returns an error if the Tokio runtime cannot be created.
pub fn start_paper_server(
    runtime: &Slot<SharedRuntime>,
    server: &Slot<MockServer>,
) -> Result<SharedRuntime, io::Error> {
    let shared_runtime = ensure_runtime(runtime)?;
    if server.with_ref(|_| ()).is_none() {
        server.set(shared_runtime.block_on(MockServer::start()));
    }
    Ok(shared_runtime)
}
