// C entry points for a host server (e.g. a web front end in another
// language). The engine is built once per process and never torn down.
use crate::chat::ChatService;
use crate::config::load_or_default;
use crate::error::Result;
use libc::c_char;
use once_cell::sync::OnceCell;
use std::ffi::{CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

static ENGINE: OnceCell<ChatService> = OnceCell::new();

fn build_engine(config_path: Option<&Path>) -> Result<ChatService> {
    let config = load_or_default(config_path)?;
    ChatService::from_config(&config)
}

/// Reads a C string; null or invalid UTF-8 reads as empty.
fn read_c_str<'a>(ptr: *const c_char) -> &'a str {
    if ptr.is_null() {
        return "";
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().unwrap_or("")
}

fn into_c_string(json: String) -> *mut c_char {
    // serde_json escapes NUL, so this only fails on a bug.
    CString::new(json)
        .unwrap_or_else(|_| CString::from(c"{}"))
        .into_raw()
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Builds the process-wide engine. `config_path` may be null for the default
/// configuration. Returns whether an engine is available afterwards.
#[no_mangle]
pub extern "C" fn phrase_engine_init(config_path: *const c_char) -> bool {
    let _ = env_logger::try_init();
    let path = read_c_str(config_path);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let path = (!path.is_empty()).then(|| Path::new(path));
        match ENGINE.get_or_try_init(|| build_engine(path)) {
            Ok(_) => true,
            Err(e) => {
                log::error!("phrase engine initialization failed: {e}");
                false
            }
        }
    }));
    result.unwrap_or_else(|_| {
        log::error!("panic during phrase engine initialization");
        false
    })
}

fn with_engine(f: impl FnOnce(&ChatService) -> String) -> *mut c_char {
    let json = catch_unwind(AssertUnwindSafe(|| match ENGINE.get() {
        Some(engine) => f(engine),
        None => error_json("engine not initialized"),
    }))
    .unwrap_or_else(|_| {
        log::error!("panic in phrase engine call");
        error_json("internal error")
    });
    into_c_string(json)
}

/// JSON `{"response": ..., "audio_url": ...}` for one chat message.
/// Free the result with `phrase_free_string`.
#[no_mangle]
pub extern "C" fn phrase_chat(message: *const c_char) -> *mut c_char {
    let message = read_c_str(message);
    with_engine(|engine| {
        serde_json::to_string(&engine.reply(message)).unwrap_or_else(|e| error_json(&e.to_string()))
    })
}

/// JSON `TranslationResult` for one input.
/// Free the result with `phrase_free_string`.
#[no_mangle]
pub extern "C" fn phrase_translate(input: *const c_char) -> *mut c_char {
    let input = read_c_str(input);
    with_engine(|engine| {
        serde_json::to_string(&engine.translate(input)).unwrap_or_else(|e| error_json(&e.to_string()))
    })
}

#[no_mangle]
pub extern "C" fn phrase_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}
