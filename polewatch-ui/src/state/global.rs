//! Global Application State
//!
//! Success and error toasts shared by every page. Each toast kind has one
//! slot; a newer message replaces the older one and restarts its lifetime.

use gloo_timers::callback::Timeout;
use leptos::*;

/// Toast flavours, each with its own slot and lifetime
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub const ALL: [ToastKind; 2] = [ToastKind::Success, ToastKind::Error];

    /// How long the toast stays up
    pub fn lifetime_ms(&self) -> u32 {
        match self {
            ToastKind::Success => 3000,
            ToastKind::Error => 5000,
        }
    }
}

/// The message a slot is showing and the generation that put it there
///
/// A pending expiry only clears the slot if no newer message has been shown
/// since it was scheduled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastSlot {
    message: Option<String>,
    generation: u64,
}

impl ToastSlot {
    /// Show `message`, returning the generation its expiry must present
    pub fn show(&mut self, message: &str) -> u64 {
        self.generation += 1;
        self.message = Some(message.to_string());
        self.generation
    }

    /// Clear the slot if `generation` is still the current one
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    success: RwSignal<ToastSlot>,
    error: RwSignal<ToastSlot>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState {
        success: create_rw_signal(ToastSlot::default()),
        error: create_rw_signal(ToastSlot::default()),
    });
}

impl GlobalState {
    fn slot(&self, kind: ToastKind) -> RwSignal<ToastSlot> {
        match kind {
            ToastKind::Success => self.success,
            ToastKind::Error => self.error,
        }
    }

    /// Message currently shown for `kind` (reactive)
    pub fn message(&self, kind: ToastKind) -> Option<String> {
        self.slot(kind).with(|slot| slot.message().map(str::to_string))
    }

    pub fn notify(&self, kind: ToastKind, message: &str) {
        let slot = self.slot(kind);
        let mut generation = 0;
        slot.update(|s| generation = s.show(message));

        Timeout::new(kind.lifetime_ms(), move || {
            slot.try_update(|s| s.expire(generation));
        })
        .forget();
    }

    pub fn show_success(&self, message: &str) {
        self.notify(ToastKind::Success, message);
    }

    pub fn show_error(&self, message: &str) {
        self.notify(ToastKind::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_expiry_keeps_newer_message() {
        let mut slot = ToastSlot::default();
        let first = slot.show("Invalid credentials. Please try again.");
        let second = slot.show("bad creds");

        assert!(!slot.expire(first));
        assert_eq!(slot.message(), Some("bad creds"));

        assert!(slot.expire(second));
        assert_eq!(slot.message(), None);
    }

    #[test]
    fn test_expire_twice_is_harmless() {
        let mut slot = ToastSlot::default();
        let generation = slot.show("Login successful!");
        assert!(slot.expire(generation));
        assert!(!slot.expire(generation));
    }

    #[test]
    fn test_same_text_shown_again_gets_fresh_lifetime() {
        let mut slot = ToastSlot::default();
        let first = slot.show("Please fill in all fields");
        let second = slot.show("Please fill in all fields");

        assert_ne!(first, second);
        assert!(!slot.expire(first));
        assert_eq!(slot.message(), Some("Please fill in all fields"));
    }

    #[test]
    fn test_error_toasts_outlive_success_toasts() {
        assert!(ToastKind::Error.lifetime_ms() > ToastKind::Success.lifetime_ms());
    }
}
