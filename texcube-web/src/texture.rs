/// Asynchronous texture loading
use std::cell::RefCell;
use std::rc::Rc;

use texcube_core::texture::PLACEHOLDER_PIXEL;
use texcube_core::{SamplingPolicy, SetupError, TextureState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlImageElement, WebGlRenderingContext as GL, WebGlTexture};

/// A texture whose contents may be replaced once the image arrives.
///
/// The GL object never changes; only what is uploaded into it does, so the
/// render loop can keep binding the same handle.
#[derive(Clone)]
pub struct LoadedTexture {
    pub texture: WebGlTexture,
    pub state: Rc<RefCell<TextureState>>,
}

/// Create the texture with the placeholder pixel and start fetching `url`.
pub fn load_texture(gl: &GL, url: &str) -> Result<LoadedTexture, SetupError> {
    let texture = gl.create_texture().ok_or(SetupError::Allocation("texture"))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        1,
        1,
        0,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        Some(&PLACEHOLDER_PIXEL[..]),
    )
    .map_err(|e| SetupError::Browser(format!("{:?}", e)))?;

    let loaded = LoadedTexture {
        texture,
        state: Rc::new(RefCell::new(TextureState::Placeholder)),
    };

    let image = HtmlImageElement::new().map_err(|e| SetupError::Browser(format!("{:?}", e)))?;

    let onload = {
        let gl = gl.clone();
        let loaded = loaded.clone();
        let image = image.clone();
        Closure::once(move || on_image_loaded(&gl, &loaded, &image))
    };
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();

    // A failed fetch leaves the placeholder in place.
    let onerror = {
        let url = url.to_string();
        Closure::once(move || log::warn!("could not load texture image {}", url))
    };
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    image.set_src(url);
    log::info!("loading texture from {}", url);

    Ok(loaded)
}

fn on_image_loaded(gl: &GL, loaded: &LoadedTexture, image: &HtmlImageElement) {
    gl.bind_texture(GL::TEXTURE_2D, Some(&loaded.texture));
    if let Err(e) = gl.tex_image_2d_with_u32_and_u32_and_image(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        image,
    ) {
        log::warn!("texture upload failed: {:?}", e);
        return;
    }

    let (width, height) = (image.natural_width(), image.natural_height());
    let sampling = loaded.state.borrow_mut().finish_load(width, height);
    apply_sampling(gl, sampling);

    log::info!("texture loaded: {}x{} ({:?})", width, height, sampling);
}

/// Set filtering for the texture bound to `TEXTURE_2D`.
fn apply_sampling(gl: &GL, sampling: SamplingPolicy) {
    match sampling {
        SamplingPolicy::Mipmapped => gl.generate_mipmap(GL::TEXTURE_2D),
        SamplingPolicy::ClampLinear => {
            gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
            gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
            gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
        }
    }
}
