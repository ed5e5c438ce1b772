use crate::constants::*;
use crate::core::style::gallery_height_css;
use crate::core::{gallery_height_vh, Frame};
use crate::dom::set_style;
use crate::render::FrameElements;
use wasm_bindgen::JsCast;
use web_sys as web;

fn create_div(document: &web::Document, class: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!(format!("create div: {:?}", e)))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = el.class_list().add_1(class);
    Ok(el)
}

/// Create `div.frame > div.sneaker` for each frame and append them to the stage.
pub fn build_frames(
    document: &web::Document,
    stage: &web::HtmlElement,
    frames: &[Frame],
) -> anyhow::Result<Vec<FrameElements>> {
    let mut out = Vec::with_capacity(frames.len());
    for frame in frames {
        let frame_el = create_div(document, FRAME_CLASS)?;
        _ = frame_el.set_attribute(FRAME_INDEX_ATTR, &frame.index.to_string());
        set_style(&frame_el, "transform", FRAME_LAYER_TRANSFORM);

        let sneaker_el = create_div(document, SNEAKER_CLASS)?;
        sneaker_el.set_inner_html(&frame.artwork);

        frame_el
            .append_child(&sneaker_el)
            .map_err(|e| anyhow::anyhow!(format!("append sneaker: {:?}", e)))?;
        stage
            .append_child(&frame_el)
            .map_err(|e| anyhow::anyhow!(format!("append frame: {:?}", e)))?;
        out.push(FrameElements {
            frame: frame_el,
            sneaker: sneaker_el,
        });
    }
    Ok(out)
}

#[inline]
pub fn apply_gallery_height(gallery: &web::HtmlElement, frame_count: usize) {
    set_style(
        gallery,
        "height",
        &gallery_height_css(gallery_height_vh(frame_count)),
    );
}

pub fn stamp_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
