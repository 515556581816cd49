use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::dashboard::Notify;

/// App-wide error toast state, provided at the root of the component tree.
#[derive(Clone)]
pub struct ToastContext {
    pub is_open: Signal<bool>,
    message: Rc<RefCell<String>>,
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
            message: Rc::new(RefCell::new(String::new())),
        }
    }

    pub fn message(&self) -> String {
        self.message.borrow().clone()
    }

    pub fn show_error(&self, message: String) {
        *self.message.borrow_mut() = message;
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    pub fn dismiss(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
    }
}

impl Notify for ToastContext {
    fn error(&self, message: &str) {
        self.show_error(message.to_string());
    }
}
