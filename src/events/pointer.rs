use crate::dom::Listener;
use crate::frame::{Scheduler, StageRuntime};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointermove(
    window: &web::Window,
    runtime: Rc<RefCell<StageRuntime>>,
    scheduler: Rc<Scheduler>,
) -> anyhow::Result<Listener> {
    Listener::passive(window.as_ref(), "pointermove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        runtime
            .borrow_mut()
            .set_pointer(ev.client_x() as f32, ev.client_y() as f32);
        scheduler.schedule();
    })
}
