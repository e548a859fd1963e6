/// Browser handles: window, canvas and the WebGL context
use texcube_core::SetupError;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext as GL, Window};

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

/// Look up the canvas by element id.
pub fn canvas(window: &Window, id: &str) -> Result<HtmlCanvasElement, SetupError> {
    let document = window.document().ok_or(SetupError::NoDocument)?;
    document
        .get_element_by_id(id)
        .and_then(|element| element.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(|| SetupError::CanvasNotFound(id.to_string()))
}

/// WebGL 1 context of the canvas.
pub fn webgl_context(canvas: &HtmlCanvasElement) -> Result<GL, SetupError> {
    canvas
        .get_context("webgl")
        .map_err(|_| SetupError::NoContext)?
        .and_then(|context| context.dyn_into::<GL>().ok())
        .ok_or(SetupError::NoContext)
}

/// Show a blocking alert; used only for failures the user must see.
pub fn alert(window: &Window, message: &str) {
    if window.alert_with_message(message).is_err() {
        log::error!("alert failed: {}", message);
    }
}
