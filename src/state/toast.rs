//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Toasts are plain data in an `RwSignal<ToastState>` context. Pages call
//! [`success`] or [`error`]; the toaster component renders the list and each
//! toast removes itself after its kind's duration.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Visual and timing category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// How long a toast of this kind stays on screen.
    pub fn duration_ms(self) -> u32 {
        match self {
            Self::Success => 2000,
            Self::Error => 3000,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        id
    }

    /// Remove a toast; unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|toast| toast.id != id);
    }
}

/// Show a success toast.
pub fn success(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Success, message.into());
}

/// Show an error toast.
pub fn error(toasts: RwSignal<ToastState>, message: impl Into<String>) {
    show(toasts, ToastKind::Error, message.into());
}

fn show(toasts: RwSignal<ToastState>, kind: ToastKind, message: String) {
    let Some(id) = toasts.try_update(|state| state.push(kind, message)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(kind.duration_ms()).await;
        let _ = toasts.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
