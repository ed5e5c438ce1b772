use crate::constants::HUE_PROPERTY;
use crate::core::style;
use crate::core::{Frame, FrameVisual, RenderTarget};
use crate::dom::set_style;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM nodes belonging to one frame: the layer wrapper and the artwork inside.
pub struct FrameElements {
    pub frame: web::HtmlElement,
    pub sneaker: web::HtmlElement,
}

/// Browser render target: inline styles on frame nodes, copy text, and the
/// ambient hue custom property on the document element.
pub struct DomStage {
    frames: Vec<FrameElements>,
    root: Option<web::HtmlElement>,
    name: Option<web::Element>,
    desc: Option<web::Element>,
}

impl DomStage {
    pub fn new(
        document: &web::Document,
        frames: Vec<FrameElements>,
        name: Option<web::Element>,
        desc: Option<web::Element>,
    ) -> Self {
        let root = document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
        if root.is_none() {
            log::warn!("no document element; ambient hue disabled");
        }
        Self {
            frames,
            root,
            name,
            desc,
        }
    }
}

impl RenderTarget for DomStage {
    fn apply_frame(&mut self, index: usize, visual: &FrameVisual) {
        let Some(els) = self.frames.get(index) else {
            return;
        };
        set_style(&els.frame, "opacity", &style::opacity_css(visual));
        set_style(&els.sneaker, "transform", &style::transform_css(visual));
        set_style(&els.sneaker, "filter", &style::filter_css(visual));
    }

    fn set_ambient_hue(&mut self, hue: f32) {
        if let Some(root) = &self.root {
            set_style(root, HUE_PROPERTY, &style::hue_css(hue));
        }
    }

    fn show_copy(&mut self, frame: &Frame) {
        let Some(name) = &self.name else {
            return;
        };
        if name.text_content().as_deref() == Some(frame.title.as_str()) {
            return;
        }
        name.set_text_content(Some(&frame.title));
        if let Some(desc) = &self.desc {
            desc.set_text_content(Some(&frame.description));
        }
        log::debug!("[copy] now showing {}", frame.title);
    }
}
