use glowring_core::TickGate;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drives a tick callback once per display refresh via requestAnimationFrame.
///
/// `start` while a loop is live cancels it first, so duplicate loops after a
/// resize are impossible. `stop` cancels the next queued callback and bumps
/// the gate generation, which guarantees no tick fires after it returns: an
/// already-dispatched in-flight callback sees a stale token and bails.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    gate: Rc<RefCell<TickGate>>,
    raf_id: Rc<Cell<Option<i32>>>,
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the loop. `tick` returns false to stop it from the inside, e.g.
    /// on surface loss.
    pub fn start(&self, mut tick: impl FnMut() -> bool + 'static) {
        self.stop();
        let token = self.gate.borrow_mut().open();

        let gate = self.gate.clone();
        let raf_id = self.raf_id.clone();
        let closure: TickClosure = Rc::new(RefCell::new(None));
        let closure_inner = closure.clone();
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !gate.borrow().admits(token) {
                return; // stale dispatch after stop or restart
            }
            if !tick() {
                gate.borrow_mut().close();
                raf_id.set(None);
                return;
            }
            // tick may itself have stopped or restarted the loop
            if gate.borrow().admits(token) {
                Self::schedule(&raf_id, &closure_inner);
            }
        }) as Box<dyn FnMut()>));

        Self::schedule(&self.raf_id, &closure);
    }

    /// Synchronous cancellation; safe to call when not running.
    pub fn stop(&self) {
        self.gate.borrow_mut().close();
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.gate.borrow().is_running()
    }

    fn schedule(raf_id: &Rc<Cell<Option<i32>>>, closure: &TickClosure) {
        if let Some(w) = web::window() {
            if let Ok(id) = w.request_animation_frame(
                closure.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
            ) {
                raf_id.set(Some(id));
            }
        }
    }
}
