//! Global navigation hook for session teardown
//!
//! The HTTP client runs outside the component tree. When it tears the
//! session down on a 401 it calls back into the router through the handler
//! registered here, so the app can update its state without a page reload.

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static NAVIGATE_CALLBACK: RefCell<Option<Rc<dyn Fn(&str)>>> = RefCell::new(None);
}

/// Set the global navigation callback
pub fn set_navigate_callback(callback: Rc<dyn Fn(&str)>) {
    NAVIGATE_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

/// Clear the navigation callback
pub fn clear_navigate_callback() {
    NAVIGATE_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Run the callback for `route`; false when none is registered
pub fn navigate(route: &str) -> bool {
    let callback = NAVIGATE_CALLBACK.with(|cb| cb.borrow().clone());
    match callback {
        Some(callback) => {
            callback(route);
            true
        }
        None => false,
    }
}
