pub mod pointer;
pub mod scroll;

use crate::dom::Listener;
use crate::frame::{Scheduler, StageRuntime};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Attach every listener that feeds the stage. Dropping the returned handles
/// detaches them.
pub fn wire_stage_events(
    window: &web::Window,
    runtime: &Rc<RefCell<StageRuntime>>,
    scheduler: &Rc<Scheduler>,
) -> anyhow::Result<Vec<Listener>> {
    Ok(vec![
        scroll::wire_scroll(window, scheduler.clone())?,
        scroll::wire_resize(window, runtime.clone(), scheduler.clone())?,
        pointer::wire_pointermove(window, runtime.clone(), scheduler.clone())?,
    ])
}
