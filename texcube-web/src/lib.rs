/// texcube Web - WebGL renderer for the rotating textured cube
///
/// Compiles the shaders, uploads the cube's buffers, starts the texture
/// download, and drives the draw from `requestAnimationFrame`.

use texcube_core::{DemoConfig, FrameDriver, SetupError};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext as GL};

pub mod buffers;
pub mod context;
pub mod program;
pub mod scene;
pub mod texture;

use buffers::Buffers;
use program::ProgramInfo;
use scene::Scene;

fn setup(canvas: &HtmlCanvasElement, config: &DemoConfig) -> Result<Scene, SetupError> {
    let gl = context::webgl_context(canvas)?;
    let program = ProgramInfo::new(&gl)?;
    let buffers = Buffers::new(&gl)?;
    let texture = texture::load_texture(&gl, &config.texture_url)?;

    // Images arrive top row first; WebGL wants the bottom row first.
    gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, 1);

    Ok(Scene {
        gl,
        canvas: canvas.clone(),
        program,
        buffers,
        texture,
        driver: FrameDriver::new(config.clone()),
    })
}

/// Set up every GPU resource and enter the render loop.
pub fn run(config: DemoConfig) -> Result<(), SetupError> {
    let window = context::window()?;
    let canvas = context::canvas(&window, &config.canvas_id)?;

    match setup(&canvas, &config) {
        Ok(scene) => scene::run(window, scene),
        Err(err) => {
            if err.is_user_visible() {
                context::alert(&window, &err.to_string());
            }
            Err(err)
        }
    }
}

fn to_js(err: SetupError) -> JsValue {
    log::error!("{}", err);
    JsValue::from_str(&err.to_string())
}

/// Run the demo on `#glcanvas` with the default texture.
#[wasm_bindgen]
pub fn start() -> Result<(), JsValue> {
    run(DemoConfig::default()).map_err(to_js)
}

/// Run the demo on another canvas or with another texture image.
#[wasm_bindgen]
pub fn start_with(canvas_id: &str, texture_url: &str) -> Result<(), JsValue> {
    let config = DemoConfig::default()
        .with_canvas_id(canvas_id)
        .with_texture_url(texture_url);
    run(config).map_err(to_js)
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("texcube web module initialized");
    Ok(())
}
