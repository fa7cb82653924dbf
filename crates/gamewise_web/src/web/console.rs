use wasm_bindgen::JsValue;

pub(super) fn info(msg: &str) {
    web_sys::console::info_1(&JsValue::from_str(msg));
}

pub(super) fn debug(msg: &str) {
    web_sys::console::debug_1(&JsValue::from_str(msg));
}
