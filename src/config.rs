use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Upload files and print where the server stored them")]
pub struct Config {
    /// Server the files are posted to
    #[structopt(long, default_value = "http://127.0.0.1:5000")]
    pub base_uri: String,

    #[structopt(long, default_value = "info")]
    pub log_level: log::LevelFilter,

    #[structopt(parse(from_os_str))]
    pub files: Vec<PathBuf>,
}
