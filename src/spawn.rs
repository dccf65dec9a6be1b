//! Local spawners for the event loops the dispatcher runs on.
//!
//! Uploads are `!Send` (browser handles are), so everything is scheduled
//! through [`futures::task::LocalSpawn`]. The webapp brings its own spawner
//! over `wasm_bindgen_futures::spawn_local`; tests use `LocalPool`.

#[cfg(not(target_arch = "wasm32"))]
pub use native::TokioSpawner;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::panic::{self, AssertUnwindSafe};

    use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};

    /// Spawns onto the current `tokio::task::LocalSet`.
    ///
    /// Outside of a runtime, or inside one but outside a `LocalSet`, the task
    /// is refused with [`SpawnError::shutdown`].
    #[derive(Clone, Copy, Debug, Default)]
    pub struct TokioSpawner;

    impl LocalSpawn for TokioSpawner {
        fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
            if tokio::runtime::Handle::try_current().is_err() {
                return Err(SpawnError::shutdown());
            }
            // tokio offers no way to ask for the current LocalSet, only a panic
            panic::catch_unwind(AssertUnwindSafe(move || {
                tokio::task::spawn_local(future);
            }))
            .map_err(|_| SpawnError::shutdown())
        }
    }

}
