use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};

/// Origin of the page the app is served from; uploads go back to it.
pub fn base_uri() -> Option<String> {
    let window = web_sys::window()?;
    match window.location().origin() {
        Ok(origin) => Some(origin),
        Err(err) => {
            log::error!("cannot read page origin: {:?}", err);
            None
        }
    }
}

/// Runs uploads on the browser event loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct WasmSpawner;

impl LocalSpawn for WasmSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
