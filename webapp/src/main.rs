mod file;
mod upload;
mod utils;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::start_app::<upload::UploadComponent>();
}
