use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

type ConfirmCallback = Box<dyn Fn()>;

/// Text shown in the confirmation dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
}

impl ConfirmPrompt {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label: "Confirm".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }

    pub fn confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }
}

/// App-wide confirmation dialog. Declining simply closes it, so only the
/// confirm path needs a callback.
#[derive(Clone)]
pub struct DialogContext {
    pub is_open: Signal<bool>,
    prompt: Rc<RefCell<Option<ConfirmPrompt>>>,
    on_confirm: Rc<RefCell<Option<Rc<ConfirmCallback>>>>,
}

impl Default for DialogContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DialogContext {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
            prompt: Rc::new(RefCell::new(None)),
            on_confirm: Rc::new(RefCell::new(None)),
        }
    }

    pub fn prompt(&self) -> Option<ConfirmPrompt> {
        self.prompt.borrow().clone()
    }

    pub fn ask(&self, prompt: ConfirmPrompt, on_confirm: impl Fn() + 'static) {
        *self.prompt.borrow_mut() = Some(prompt);
        *self.on_confirm.borrow_mut() = Some(Rc::new(Box::new(on_confirm)));
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    pub fn confirm(&self) {
        let callback = self.on_confirm.borrow_mut().take();
        self.hide();
        if let Some(callback) = callback {
            callback();
        }
    }

    pub fn hide(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
        *self.on_confirm.borrow_mut() = None;
    }
}
