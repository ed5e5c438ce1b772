#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod page;
mod render;

use crate::constants::*;

/// Everything a running stage owns. Dropping it detaches the listeners and
/// cancels any queued animation frame.
struct Stage {
    _listeners: Vec<dom::Listener>,
    _scheduler: Rc<frame::Scheduler>,
}

thread_local! {
    static ACTIVE: RefCell<Option<Stage>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sneaker-stage starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Detach the running stage, if any. Called on `pagehide`; exported for hosts
/// that swap page content without unloading.
#[wasm_bindgen]
pub fn teardown() {
    let stage = ACTIVE.with(|active| active.borrow_mut().take());
    if stage.is_some() {
        drop(stage);
        log::info!("stage torn down");
    }
}

fn wire_pagehide(window: &web::Window) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        // pages kept in the back/forward cache resume with listeners intact
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .map(|e| e.persisted())
            .unwrap_or(false);
        if !persisted {
            teardown();
        }
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    closure.forget();
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let stage_el = dom::required_element(&document, STAGE_ID)?;
    let gallery = dom::required_element(&document, GALLERY_ID)?;
    let name = dom::optional_element(&document, PRODUCT_NAME_ID);
    let desc = dom::optional_element(&document, PRODUCT_DESC_ID);

    page::stamp_year(&document);

    let animator = crate::core::StageAnimator::new(
        crate::core::default_frames(),
        crate::core::StageParams::default(),
    )?;
    let elements = page::build_frames(&document, &stage_el, animator.frames())?;
    page::apply_gallery_height(&gallery, animator.frame_count());
    log::info!(
        "[stage] frames={} titles={:?}",
        animator.frame_count(),
        animator.frames().iter().map(|f| f.title.as_str()).collect::<Vec<_>>()
    );

    let dom_stage = render::DomStage::new(&document, elements, name, desc);
    let runtime = Rc::new(RefCell::new(frame::StageRuntime::new(
        window.clone(),
        gallery,
        animator,
        dom_stage,
    )));
    let scheduler = Rc::new(frame::Scheduler::new(window.clone(), runtime.clone()));
    let listeners = events::wire_stage_events(&window, &runtime, &scheduler)?;
    wire_pagehide(&window);

    // initial paint
    scheduler.schedule();

    ACTIVE.with(|active| {
        *active.borrow_mut() = Some(Stage {
            _listeners: listeners,
            _scheduler: scheduler,
        });
    });
    log::info!("[stage] ready");
    Ok(())
}
