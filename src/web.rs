#![cfg(not(tarpaulin_include))]
#![cfg(feature = "web")]
//! Browser binding for the upload widget.
//!
//! Elements are looked up once when the widget starts; a missing or
//! mistyped element stops start-up with an error instead of failing later
//! inside an event handler.

use log::{Level, LevelFilter, Log, Metadata, Record, error, warn};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    DataTransfer, Document, DragEvent, Event, EventTarget, File, FileList, HtmlElement,
    HtmlFormElement, HtmlInputElement, Window, console,
};

use crate::candidate::CandidateFile;
use crate::error::{IntakeError, Result};
use crate::glue::{MENU_OPEN_CLASS, MenuToggle, check_passwords};
use crate::intake::UploadIntake;
use crate::locate::{ElementRole, locate, narrow};
use crate::options::IntakeOptions;
use crate::surface::Surface;

fn js_err(value: JsValue) -> IntakeError {
    let message = value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    IntakeError::Surface(message)
}

impl From<IntakeError> for JsValue {
    fn from(e: IntakeError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

/// `log` backend writing to the browser console
struct ConsoleLogger;

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format!("[{}] {}", record.target(), record.args()));
        match record.level() {
            Level::Error => console::error_1(&line),
            Level::Warn => console::warn_1(&line),
            Level::Info => console::info_1(&line),
            Level::Debug | Level::Trace => console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Route `log` records to the console. Calling it twice is harmless.
#[wasm_bindgen]
pub fn init_console_logging(verbose: bool) {
    if log::set_logger(&CONSOLE_LOGGER).is_ok() {
        log::set_max_level(if verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        });
    }
}

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| IntakeError::Surface("no window available".to_string()))
}

fn document(window: &Window) -> Result<Document> {
    window
        .document()
        .ok_or_else(|| IntakeError::Surface("no document available".to_string()))
}

fn find<T: JsCast>(document: &Document, id: &str, expected: &'static str) -> Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| IntakeError::MissingSurfaceElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| IntakeError::WrongElementType {
            id: id.to_string(),
            expected,
        })
}

fn files_of(list: Option<FileList>) -> Vec<CandidateFile<File>> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| CandidateFile::with_handle(file.name(), file))
        .collect()
}

/// The page elements the widget writes to
pub struct WebSurface {
    window: Window,
    dropbox: HtmlElement,
    file_input: HtmlInputElement,
    hover_class: String,
}

impl WebSurface {
    pub fn file_input(&self) -> &HtmlInputElement {
        &self.file_input
    }
}

impl Surface for WebSurface {
    type Handle = File;

    fn set_field_files(&mut self, files: &[CandidateFile<File>]) -> Result<()> {
        let transfer = DataTransfer::new().map_err(js_err)?;
        let items = transfer.items();
        for file in files {
            items.add_with_file(&file.handle).map_err(js_err)?;
        }
        self.file_input.set_files(transfer.files().as_ref());
        Ok(())
    }

    fn field_file_count(&self) -> usize {
        self.file_input
            .files()
            .map(|list| list.length() as usize)
            .unwrap_or(0)
    }

    fn set_label_text(&mut self, text: &str) -> Result<()> {
        self.dropbox.set_text_content(Some(text));
        Ok(())
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.window.alert_with_message(message).map_err(js_err)
    }

    fn set_hovering(&mut self, hovering: bool) -> Result<()> {
        let classes = self.dropbox.class_list();
        if hovering {
            classes.add_1(&self.hover_class).map_err(js_err)
        } else {
            classes.remove_1(&self.hover_class).map_err(js_err)
        }
    }

    fn open_file_chooser(&mut self) -> Result<()> {
        self.file_input.click();
        Ok(())
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Event listeners installed on the page
///
/// Dropping the binding detaches every listener it installed, so JavaScript
/// must keep it alive for as long as the page should react.
#[wasm_bindgen]
pub struct PageBinding {
    listeners: Vec<Listener>,
}

impl PageBinding {
    fn new() -> Self {
        PageBinding {
            listeners: Vec::new(),
        }
    }

    fn listen<F>(&mut self, target: &EventTarget, event: &'static str, handler: F) -> Result<()>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(js_err)?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }
}

impl Drop for PageBinding {
    fn drop(&mut self) {
        for listener in &self.listeners {
            let _ = listener.target.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

type SharedIntake = Rc<RefCell<UploadIntake<WebSurface>>>;

/// Run `f` on the widget unless another handler is still holding it.
fn with_intake<T>(
    intake: &SharedIntake,
    f: impl FnOnce(&mut UploadIntake<WebSurface>) -> Result<T>,
) -> Option<T> {
    let Ok(mut intake) = intake.try_borrow_mut() else {
        warn!("upload widget busy, event ignored");
        return None;
    };
    match f(&mut *intake) {
        Ok(value) => Some(value),
        Err(e) => {
            error!("upload widget: {}", e);
            None
        }
    }
}

fn bind_intake(options: &IntakeOptions) -> Result<PageBinding> {
    let window = window()?;
    let document = document(&window)?;

    // Every element is found and typed before the first listener goes in
    let located = locate(options, |id| document.get_element_by_id(id))?;
    let dropbox: HtmlElement =
        narrow(located.dropbox, ElementRole::Dropbox, options, |e| e.dyn_into())?;
    let file_input: HtmlInputElement =
        narrow(located.file_input, ElementRole::FileInput, options, |e| e.dyn_into())?;
    let form: HtmlFormElement = narrow(located.form, ElementRole::Form, options, |e| e.dyn_into())?;
    let browse_button: HtmlElement =
        narrow(located.browse_button, ElementRole::BrowseButton, options, |e| e.dyn_into())?;

    let surface = WebSurface {
        window,
        dropbox: dropbox.clone(),
        file_input: file_input.clone(),
        hover_class: options.hover_class.clone(),
    };
    let intake: SharedIntake = Rc::new(RefCell::new(UploadIntake::new(surface)));
    let mut binding = PageBinding::new();

    // Drag lifecycle: the browser default is suppressed even when the widget is busy
    let shared = intake.clone();
    binding.listen(&dropbox, "dragenter", move |event| {
        event.prevent_default();
        with_intake(&shared, |i| Ok(i.on_drag_enter()));
    })?;

    let shared = intake.clone();
    binding.listen(&dropbox, "dragover", move |event| {
        event.prevent_default();
        with_intake(&shared, |i| Ok(i.on_drag_over()));
    })?;

    let shared = intake.clone();
    binding.listen(&dropbox, "dragleave", move |event| {
        event.prevent_default();
        with_intake(&shared, |i| Ok(i.on_drag_leave()));
    })?;

    let shared = intake.clone();
    binding.listen(&dropbox, "drop", move |event| {
        // Suppress navigation before any alert can block the handler
        event.prevent_default();
        let files = event
            .dyn_ref::<DragEvent>()
            .and_then(|drag| drag.data_transfer())
            .map(|transfer| files_of(transfer.files()))
            .unwrap_or_default();
        with_intake(&shared, |i| i.on_drop(files));
    })?;

    // Native browse: the field already holds the selection
    let shared = intake.clone();
    binding.listen(&file_input, "change", move |_| {
        with_intake(&shared, |i| {
            let selected = files_of(i.surface().file_input().files());
            i.on_change(&selected)
        });
    })?;

    let shared = intake.clone();
    binding.listen(&browse_button, "click", move |_| {
        with_intake(&shared, |i| i.on_browse_click());
    })?;

    let shared = intake;
    binding.listen(&form, "submit", move |event| {
        // A widget failure must not let an empty form through
        let blocked = with_intake(&shared, |i| i.on_submit())
            .map(|decision| decision.is_blocked())
            .unwrap_or(true);
        if blocked {
            event.prevent_default();
        }
    })?;

    Ok(binding)
}

/// Attach the upload widget to the page
///
/// # Arguments
/// * `options_json` - Optional JSON overriding element ids / hover class
///
/// # Returns
/// * The listener binding, or an error naming the first missing element
#[wasm_bindgen]
pub fn start_intake(options_json: Option<String>) -> std::result::Result<PageBinding, JsValue> {
    let options = IntakeOptions::from_optional_json(options_json.as_deref())?;
    Ok(bind_intake(&options)?)
}

/// Open or close the navigation menu (`#menu`)
#[wasm_bindgen]
pub fn toggle_menu() -> std::result::Result<bool, JsValue> {
    let document = document(&window()?)?;
    let menu: HtmlElement = find(&document, "menu", "HTML element")?;
    let classes = menu.class_list();

    let open = MenuToggle::new(classes.contains(MENU_OPEN_CLASS)).toggle();
    classes
        .toggle_with_force(MENU_OPEN_CLASS, open)
        .map_err(js_err)?;
    Ok(open)
}

fn bind_register(document: &Document) -> Result<PageBinding> {
    let button: HtmlElement = find(document, "register-button", "HTML element")?;
    let password: HtmlInputElement = find(document, "password", "text input")?;
    let confirm: HtmlInputElement = find(document, "confirm-password", "text input")?;
    let form: HtmlFormElement = document
        .query_selector("form")
        .map_err(js_err)?
        .ok_or_else(|| IntakeError::MissingSurfaceElement("form".to_string()))?
        .dyn_into::<HtmlFormElement>()
        .map_err(|_| IntakeError::WrongElementType {
            id: "form".to_string(),
            expected: "form",
        })?;
    let window = window()?;

    let mut binding = PageBinding::new();
    binding.listen(&button, "click", move |event| {
        let check = check_passwords(&password.value(), &confirm.value());
        if let Err(e) = window.alert_with_message(check.message()) {
            error!("register check: {}", js_err(e));
        }
        if check.allows_submit() {
            if let Err(e) = form.submit() {
                error!("register submit: {}", js_err(e));
            }
        } else {
            event.prevent_default();
        }
    })?;
    Ok(binding)
}

/// Wire the password confirmation check to the registration button
#[wasm_bindgen]
pub fn bind_register_check() -> std::result::Result<PageBinding, JsValue> {
    let document = document(&window()?)?;
    Ok(bind_register(&document)?)
}
