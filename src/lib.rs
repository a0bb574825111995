//! Gamics Contact Page
//!
//! Browser entry point: boots the contact page components from
//! `gamics-core` against the live document.
//!
//! ```html
//! <script type="module">
//!   import init from "./pkg/gamics_contact.js";
//!   init();
//! </script>
//! ```

mod logging;
mod runtime;
mod web_page;

use std::cell::RefCell;
use std::rc::Rc;

use gamics_core::ContactConfig;
use gloo::events::EventListener;
use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::runtime::Runtime;

thread_local! {
    static RUNTIME: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
}

/// Runs when the module is instantiated; waits for the DOM if needed
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    logging::init();

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        debug!("Waiting for DOMContentLoaded");
        EventListener::once(&document, "DOMContentLoaded", |_event| {
            if let Err(err) = boot() {
                tracing::error!(?err, "Contact page failed to start");
            }
        })
        .forget();
        return Ok(());
    }
    boot()
}

fn boot() -> Result<(), JsValue> {
    let runtime = Runtime::boot(ContactConfig::default())?;
    let previous = RUNTIME.with(|slot| slot.borrow_mut().replace(runtime));
    if let Some(previous) = previous {
        previous.shutdown();
    }
    Ok(())
}

/// Remove every listener, timer, observer and notification
#[wasm_bindgen]
pub fn teardown() {
    let runtime = RUNTIME.with(|slot| slot.borrow_mut().take());
    if let Some(runtime) = runtime {
        runtime.shutdown();
    }
}
