use crate::rust_error;
use crate::web_error_handling::JsResult;


pub struct WebDocument(web_sys::Document);

impl WebDocument {
    pub fn get_existing_element_by_id(&self, element_id: &str) -> JsResult<web_sys::Element> {
        let element = self
            .0
            .get_element_by_id(element_id)
            .ok_or_else(|| rust_error!("Cannot find element \"{}\"", element_id))?;
        if !element.is_object() {
            return Err(rust_error!("Element \"{}\" is not an object", element_id));
        }
        Ok(element)
    }

    pub fn get_existing_input_by_id(
        &self, element_id: &str,
    ) -> JsResult<web_sys::HtmlInputElement> {
        use wasm_bindgen::JsCast;
        self.get_existing_element_by_id(element_id)?
            .dyn_into::<web_sys::HtmlInputElement>()
            .map_err(|_| rust_error!("Element \"{}\" is not an input", element_id))
    }
}

pub fn web_document() -> JsResult<WebDocument> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| rust_error!("Cannot access the document"))?;
    Ok(WebDocument(document))
}
