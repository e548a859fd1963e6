/// Per-frame drawing and the animation loop
use std::cell::RefCell;
use std::rc::Rc;

use texcube_core::geometry::INDEX_COUNT;
use texcube_core::{Frame, FrameDriver, SetupError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WebGlRenderingContext as GL, Window};

use crate::buffers::Buffers;
use crate::program::ProgramInfo;
use crate::texture::LoadedTexture;

/// Everything the frame closure owns.
pub struct Scene {
    pub gl: GL,
    pub canvas: HtmlCanvasElement,
    pub program: ProgramInfo,
    pub buffers: Buffers,
    pub texture: LoadedTexture,
    pub driver: FrameDriver,
}

impl Scene {
    /// Advance the frame state and draw the cube once.
    pub fn render(&mut self, now_ms: f64) {
        let width = self.canvas.client_width() as f32;
        let height = self.canvas.client_height() as f32;
        let frame = self.driver.tick(now_ms, width, height);
        self.draw(&frame);
    }

    fn draw(&self, frame: &Frame) {
        let gl = &self.gl;
        let [r, g, b, a] = self.driver.config().clear_color;
        gl.clear_color(r, g, b, a);
        gl.clear_depth(1.0);
        gl.enable(GL::DEPTH_TEST);
        gl.depth_func(GL::LEQUAL);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        self.bind_attribute(&self.buffers.position, self.program.vertex_position, 3);
        self.bind_attribute(&self.buffers.texture_coord, self.program.texture_coord, 2);
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&self.buffers.indices));

        gl.use_program(Some(&self.program.program));
        gl.uniform_matrix4fv_with_f32_array(
            self.program.projection_matrix.as_ref(),
            false,
            frame.projection.as_slice(),
        );
        gl.uniform_matrix4fv_with_f32_array(
            self.program.model_view_matrix.as_ref(),
            false,
            frame.model_view.as_slice(),
        );

        // Texture unit 0
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.texture.texture));
        gl.uniform1i(self.program.sampler.as_ref(), 0);

        gl.draw_elements_with_i32(GL::TRIANGLES, INDEX_COUNT as i32, GL::UNSIGNED_SHORT, 0);
    }

    /// Point a float attribute at a tightly packed buffer.
    fn bind_attribute(&self, buffer: &web_sys::WebGlBuffer, location: u32, components: i32) {
        self.gl.bind_buffer(GL::ARRAY_BUFFER, Some(buffer));
        self.gl
            .vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, 0, 0);
        self.gl.enable_vertex_attrib_array(location);
    }
}

fn request_frame(window: &Window, callback: &Closure<dyn FnMut(f64)>) -> Result<i32, SetupError> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| SetupError::Browser(format!("{:?}", e)))
}

/// Hand the scene to `requestAnimationFrame` for the lifetime of the page.
pub fn run(window: Window, mut scene: Scene) -> Result<(), SetupError> {
    // `f` holds the frame closure so it can schedule itself again.
    let f: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    let loop_window = window.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        scene.render(now);

        if let Some(callback) = f.borrow().as_ref() {
            if let Err(e) = request_frame(&loop_window, callback) {
                log::error!("could not schedule next frame: {}", e);
            }
        }
    }) as Box<dyn FnMut(f64)>));

    match g.borrow().as_ref() {
        Some(callback) => request_frame(&window, callback)?,
        None => return Err(SetupError::Browser("frame callback missing".to_string())),
    };
    log::info!("render loop started");
    Ok(())
}
