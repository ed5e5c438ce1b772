use crate::core::{Coalescer, SectionGeometry, StageAnimator, Tick};
use crate::dom;
use crate::page;
use crate::render::DomStage;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct StageRuntime {
    window: web::Window,
    gallery: web::HtmlElement,
    animator: StageAnimator,
    dom: DomStage,
}

impl StageRuntime {
    pub fn new(
        window: web::Window,
        gallery: web::HtmlElement,
        animator: StageAnimator,
        dom: DomStage,
    ) -> Self {
        Self {
            window,
            gallery,
            animator,
            dom,
        }
    }

    fn geometry(&self) -> SectionGeometry {
        let rect = self.gallery.get_bounding_client_rect();
        let (_, viewport_h) = dom::viewport_size(&self.window);
        SectionGeometry {
            top: rect.top() as f32,
            bottom: rect.bottom() as f32,
            viewport_height: viewport_h as f32,
        }
    }

    pub fn tick(&mut self) {
        let geometry = self.geometry();
        if let Tick::Rendered { progress, active } =
            self.animator.recompute(geometry, &mut self.dom)
        {
            log::debug!("[stage] progress={:.4} active={:.3}", progress, active);
        }
    }

    pub fn set_pointer(&mut self, client_x: f32, client_y: f32) {
        let (w, h) = dom::viewport_size(&self.window);
        self.animator.set_pointer(
            Vec2::new(client_x, client_y),
            Vec2::new(w as f32, h as f32),
        );
    }

    /// Re-apply layout that depends on the viewport and force the next repaint.
    pub fn relayout(&mut self) {
        page::apply_gallery_height(&self.gallery, self.animator.frame_count());
        self.animator.invalidate();
    }
}

/// Animation-frame scheduler: at most one queued tick however many events fire.
pub struct Scheduler {
    window: web::Window,
    coalescer: Rc<RefCell<Coalescer>>,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: Closure<dyn FnMut()>,
}

impl Scheduler {
    pub fn new(window: web::Window, runtime: Rc<RefCell<StageRuntime>>) -> Self {
        let coalescer = Rc::new(RefCell::new(Coalescer::default()));
        let frame_id = Rc::new(Cell::new(None));
        let coalescer_tick = coalescer.clone();
        let frame_id_tick = frame_id.clone();
        let callback = Closure::wrap(Box::new(move || {
            frame_id_tick.set(None);
            if !coalescer_tick.borrow_mut().begin_tick() {
                return;
            }
            runtime.borrow_mut().tick();
        }) as Box<dyn FnMut()>);
        Self {
            window,
            coalescer,
            frame_id,
            callback,
        }
    }

    pub fn schedule(&self) {
        if !self.coalescer.borrow_mut().request() {
            return;
        }
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => self.frame_id.set(Some(id)),
            Err(e) => {
                log::warn!("requestAnimationFrame failed: {:?}", e);
                self.coalescer.borrow_mut().cancel();
            }
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            _ = self.window.cancel_animation_frame(id);
        }
        let c = self.coalescer.borrow();
        log::debug!(
            "[scheduler] requests={} coalesced={} ticks={}",
            c.requested(),
            c.coalesced(),
            c.ticks()
        );
    }
}
