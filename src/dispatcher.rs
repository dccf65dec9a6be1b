use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use futures::task::{LocalSpawn, LocalSpawnExt};

use crate::error::UploadError;
use crate::file::FileHandle;
use crate::transport::Transport;

/// Where completed uploads end up.
///
/// Results arrive in completion order, never submission order. The sink is
/// only ever appended to.
pub trait ResultsSink {
    fn on_result(&self, path: &str);

    /// Called once per failed upload. Failures are silent unless a sink
    /// overrides this.
    fn on_failure(&self, _name: &str, _err: &UploadError) {}
}

impl<S: ResultsSink + ?Sized> ResultsSink for Rc<S> {
    fn on_result(&self, path: &str) {
        (**self).on_result(path)
    }

    fn on_failure(&self, name: &str, err: &UploadError) {
        (**self).on_failure(name, err)
    }
}

pub struct Dispatcher<T, S, P> {
    transport: Rc<T>,
    sink: Rc<S>,
    spawner: P,
}

impl<T, S, P> Dispatcher<T, S, P>
where
    T: Transport + 'static,
    S: ResultsSink + 'static,
    P: LocalSpawn,
{
    pub fn new(transport: T, sink: S, spawner: P) -> Self {
        Self {
            transport: Rc::new(transport),
            sink: Rc::new(sink),
            spawner,
        }
    }

    /// Schedules one independent upload per file and returns how many were
    /// scheduled. An empty selection does nothing.
    pub fn on_files_selected<I>(&self, files: I) -> usize
    where
        I: IntoIterator<Item = T::File>,
    {
        files
            .into_iter()
            .map(|file| self.upload_one(file))
            .filter(|scheduled| *scheduled)
            .count()
    }

    /// Fire and forget: the upload runs on the spawner, its outcome goes to
    /// the sink. Returns false if the spawner refused the task.
    pub fn upload_one(&self, file: T::File) -> bool {
        let name = file.name();
        match self.spawner.spawn_local(self.upload(file)) {
            Ok(()) => true,
            Err(err) => {
                log::error!("cannot schedule upload of {}: {:?}", name, err);
                false
            }
        }
    }

    /// The upload transaction itself: submit, then append the returned path.
    ///
    /// Nothing is logged or sent until the returned future is first polled.
    pub fn upload(&self, file: T::File) -> LocalBoxFuture<'static, ()> {
        let transport = Rc::clone(&self.transport);
        let sink = Rc::clone(&self.sink);
        async move {
            let name = file.name();
            let size = file.size();
            let mime_type = file.mime_type();
            log::info!("uploading: {} {} {}", name, size, mime_type);

            match transport.submit(file).await {
                Ok(resp) => {
                    log::info!("received upload response: {:?}", resp);
                    sink.on_result(&resp.path);
                }
                Err(err) => {
                    log::debug!("upload of {} failed: {}", name, err);
                    sink.on_failure(&name, &err);
                }
            }
        }
        .boxed_local()
    }
}
