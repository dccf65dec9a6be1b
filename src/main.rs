use std::process;

use okuri::{Dispatcher, HttpTransport, LocalFile, ResultsSink, TokioSpawner, UploadError};
use simple_logger::SimpleLogger;
use structopt::StructOpt;
use tokio::task::LocalSet;

mod config;

/// Prints one stored path per line, in the order uploads complete.
struct PrintSink;

impl ResultsSink for PrintSink {
    fn on_result(&self, path: &str) {
        println!("{}", path);
    }

    fn on_failure(&self, name: &str, err: &UploadError) {
        log::warn!("upload of {} failed: {}", name, err);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = config::Config::from_args();
    if let Err(err) = SimpleLogger::new()
        .with_utc_timestamps()
        .with_level(config.log_level)
        .init()
    {
        eprintln!("cannot initialize logger: {}", err);
    }

    let mut files = Vec::with_capacity(config.files.len());
    for path in &config.files {
        match LocalFile::open(path).await {
            Ok(file) => files.push(file),
            Err(err) => log::error!("cannot open {}: {}", path.display(), err),
        }
    }
    if files.is_empty() && !config.files.is_empty() {
        log::error!("no file to upload");
        process::exit(1);
    }

    let transport = HttpTransport::<LocalFile>::new(&config.base_uri);
    let dispatcher = Dispatcher::new(transport, PrintSink, TokioSpawner);

    let local = LocalSet::new();
    local
        .run_until(async {
            let scheduled = dispatcher.on_files_selected(files);
            log::debug!("{} uploads in flight", scheduled);
        })
        .await;
    // wait for every scheduled upload
    local.await;
}
