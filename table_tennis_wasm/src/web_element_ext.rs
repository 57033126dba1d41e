use crate::web_error_handling::JsResult;


pub trait WebElementExt {
    // Works for any element with a `disabled` attribute (buttons, inputs, fieldsets).
    fn set_disabled(&self, disabled: bool) -> JsResult<()>;
}

impl WebElementExt for web_sys::Element {
    fn set_disabled(&self, disabled: bool) -> JsResult<()> {
        if disabled {
            self.set_attribute("disabled", "")
        } else {
            self.remove_attribute("disabled")
        }
    }
}
