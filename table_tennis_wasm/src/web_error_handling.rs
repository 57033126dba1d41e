use std::cell::RefCell;

use wasm_bindgen::prelude::*;


pub type JsResult<T> = Result<T, JsValue>;

// The page is single-threaded, so wrapping all mutable singletons in `thread_local!` seems ok.
thread_local! {
    static LAST_PANIC: RefCell<String> = RefCell::new(String::new());
}

// Copied from console_error_panic_hook
#[wasm_bindgen]
extern "C" {
    type Error;
    #[wasm_bindgen(constructor)]
    fn new() -> Error;
    #[wasm_bindgen(structural, method, getter)]
    fn stack(error: &Error) -> String;
}

#[wasm_bindgen]
pub fn set_panic_hook() {
    use std::panic;
    use std::sync::Once;
    static SET_HOOK: Once = Once::new();
    SET_HOOK.call_once(|| {
        panic::set_hook(Box::new(|panic_info| {
            // Log to the browser developer console. For more details see
            // https://github.com/rustwasm/console_error_panic_hook#readme
            console_error_panic_hook::hook(panic_info);

            // Keep the report around so that the page can show it instead of silently freezing.
            let backtrace = Error::new().stack();
            LAST_PANIC.with(|cell| *cell.borrow_mut() = format!("{panic_info}\n{backtrace}"));
        }));
    });
}

#[wasm_bindgen]
pub fn last_panic() -> String { LAST_PANIC.with(|cell| cell.borrow().clone()) }

#[wasm_bindgen(getter_with_clone)]
pub struct RustError {
    pub message: String,
}

#[macro_export]
macro_rules! rust_error {
    ($($arg:tt)*) => {
        wasm_bindgen::JsValue::from(
            $crate::web_error_handling::RustError{ message: format!($($arg)*) }
        )
    };
}
