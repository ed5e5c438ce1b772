use crate::dom::Listener;
use crate::frame::{Scheduler, StageRuntime};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(window: &web::Window, scheduler: Rc<Scheduler>) -> anyhow::Result<Listener> {
    Listener::passive(window.as_ref(), "scroll", move |_ev: web::Event| {
        scheduler.schedule();
    })
}

pub fn wire_resize(
    window: &web::Window,
    runtime: Rc<RefCell<StageRuntime>>,
    scheduler: Rc<Scheduler>,
) -> anyhow::Result<Listener> {
    Listener::new(window.as_ref(), "resize", move |_ev: web::Event| {
        runtime.borrow_mut().relayout();
        scheduler.schedule();
    })
}
