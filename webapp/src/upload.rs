use okuri::{Dispatcher, HttpTransport, ResultsSink};
use yew::{classes, html, Callback, ChangeData, Component, ComponentLink, Html};

use crate::file::BrowserFile;
use crate::utils::{base_uri, WasmSpawner};

pub enum UploadMsg {
    FilesSelected(Vec<web_sys::File>),
    Uploaded(String),
}

/// Hands every returned path back to the component.
struct LinkSink(Callback<String>);

impl ResultsSink for LinkSink {
    fn on_result(&self, path: &str) {
        self.0.emit(path.to_owned());
    }
}

type BrowserDispatcher = Dispatcher<HttpTransport<BrowserFile>, LinkSink, WasmSpawner>;

pub struct UploadComponent {
    link: ComponentLink<Self>,
    dispatcher: Option<BrowserDispatcher>,
    // completion order, append only
    uploads: Vec<String>,
}

fn file_input(comp: &UploadComponent) -> Html {
    let file_onchange = comp.link.batch_callback(|e| {
        if let ChangeData::Files(files) = e {
            let files = (0..files.length())
                .filter_map(|idx| files.get(idx))
                .collect();
            Some(UploadMsg::FilesSelected(files))
        } else {
            None
        }
    });

    html! {
        <div class=classes!("flex", "items-center", "justify-center", "bg-gray-lighter", "mt-12")>
            <label class=classes!("w-1/2", "flex", "flex-col", "items-center", "px-4", "py-6", "bg-gray-600", "text-gray-400", "rounded-lg", "shadow-lg", "tracking-wide", "uppercase", "border", "border-gray-400", "cursor-pointer", "hover:bg-gray-400", "hover:text-gray-600")>
                <svg class=classes!("w-8", "h-8") fill="currentColor" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 20 20">
                    <path d="M16.88 9.1A4 4 0 0 1 16 17H5a5 5 0 0 1-1-9.9V7a3 3 0 0 1 4.52-2.59A4.98 4.98 0 0 1 17 8c0 .38-.04.74-.12 1.1zM11 11h3l-4-4-4 4h3v3h2v-3z" />
                </svg>
                <span class=classes!("mt-2", "text-base", "leading-normal")>{ "Select files" }</span>
                <input type="file" multiple=true class=classes!("hidden") onchange={file_onchange} />
            </label>
        </div>
    }
}

fn upload_link(path: &str) -> Html {
    html! {
        <>
            <a href={path.to_owned()} class=classes!("text-gray-300", "hover:text-gray-100")>{ path.to_owned() }</a>
            <br />
        </>
    }
}

impl Component for UploadComponent {
    type Message = UploadMsg;
    type Properties = ();

    fn create(_props: Self::Properties, link: ComponentLink<Self>) -> Self {
        let dispatcher = match base_uri() {
            Some(base_uri) => {
                let sink = LinkSink(link.callback(UploadMsg::Uploaded));
                Some(Dispatcher::new(
                    HttpTransport::new(base_uri),
                    sink,
                    WasmSpawner,
                ))
            }
            None => {
                log::error!("cannot retrieve page origin, uploads are disabled");
                None
            }
        };

        Self {
            link,
            dispatcher,
            uploads: Vec::new(),
        }
    }

    fn update(&mut self, msg: Self::Message) -> bool {
        match msg {
            UploadMsg::FilesSelected(files) => {
                if let Some(dispatcher) = &self.dispatcher {
                    dispatcher.on_files_selected(files.into_iter().map(BrowserFile::from));
                }
                false
            }
            UploadMsg::Uploaded(path) => {
                self.uploads.push(path);
                true
            }
        }
    }

    fn change(&mut self, _props: Self::Properties) -> bool {
        false
    }

    fn view(&self) -> Html {
        html! {
            <div class=classes!("m-auto", "min-w-1/2", "border-solid", "border-2", "border-opacity-20", "rounded-xl")>
                { file_input(self) }
                <div id="uploads" class=classes!("text-center", "mt-5", "mb-5")>
                    { for self.uploads.iter().map(|path| upload_link(path)) }
                </div>
            </div>
        }
    }
}
