use crate::core::Color;
use crate::scenes::palette::{CYAN, ERROR_RED};

use super::dom::InlineStyle;
use super::tween::Easing;

/// Seconds after creation when the toast starts sliding in
pub const SLIDE_IN_AT: f32 = 0.1;
pub const SLIDE_OUT_AT: f32 = 3.0;
pub const REMOVE_AT: f32 = 3.3;
pub const SLIDE_DURATION: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    pub fn background(self) -> Color {
        match self {
            ToastKind::Success => CYAN,
            ToastKind::Error => ERROR_RED,
        }
    }

    fn background_css(self) -> &'static str {
        match self {
            ToastKind::Success => "#06b6d4",
            ToastKind::Error => "#ef4444",
        }
    }
}

/// Transient message pinned to the top-right corner
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub kind: ToastKind,
    pub created_at: f32,
}

impl Toast {
    pub fn class_name(&self) -> String {
        format!("form-message {}", self.kind.as_str())
    }

    /// Horizontal offset as a fraction of the toast's width; 1 is off-screen
    pub fn offset(&self, now: f32) -> f32 {
        let age = now - self.created_at;
        if age < SLIDE_IN_AT {
            1.0
        } else if age < SLIDE_OUT_AT {
            1.0 - Easing::EaseInOut.apply((age - SLIDE_IN_AT) / SLIDE_DURATION)
        } else {
            Easing::EaseInOut.apply((age - SLIDE_OUT_AT) / SLIDE_DURATION)
        }
    }

    pub fn is_expired(&self, now: f32) -> bool {
        now - self.created_at >= REMOVE_AT
    }

    pub fn style(&self, now: f32) -> InlineStyle {
        let mut style = InlineStyle::new();
        style.set("position", "fixed");
        style.set("top", "20px");
        style.set("right", "20px");
        style.set("background", self.kind.background_css());
        style.set("color", "white");
        style.set("transform", format!("translateX({}%)", (self.offset(now) * 100.0).round()));
        style
    }
}

/// Live toasts in creation order
#[derive(Debug, Clone, Default)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind, now: f32) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            message: message.into(),
            kind,
            created_at: now,
        });
        id
    }

    /// Drop expired toasts; returns how many were removed
    pub fn prune(&mut self, now: f32) -> usize {
        let before = self.toasts.len();
        self.toasts.retain(|toast| !toast.is_expired(now));
        before - self.toasts.len()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toast_at(created_at: f32) -> Toast {
        Toast {
            id: 0,
            message: "hi".into(),
            kind: ToastKind::Success,
            created_at,
        }
    }

    #[test]
    fn test_slide_timeline() {
        let toast = toast_at(10.0);
        assert_eq!(toast.offset(10.05), 1.0);
        assert_eq!(toast.offset(11.0), 0.0);
        assert_eq!(toast.offset(12.9), 0.0);
        assert!(toast.offset(13.15) > 0.0);
        assert!(!toast.is_expired(13.2));
        assert!(toast.is_expired(13.3));
    }

    #[test]
    fn test_style_reflects_kind_and_slide() {
        let toast = toast_at(0.0);
        let style = toast.style(0.0);
        assert_eq!(style.get("background"), Some("#06b6d4"));
        assert_eq!(style.get("transform"), Some("translateX(100%)"));
        assert_eq!(toast.style(1.0).get("transform"), Some("translateX(0%)"));
        assert_eq!(toast.class_name(), "form-message success");
    }

    #[test]
    fn test_error_colour() {
        assert_eq!(ToastKind::Error.background(), ERROR_RED);
    }

    #[test]
    fn test_prune_removes_expired_only() {
        let mut stack = ToastStack::new();
        stack.push("first", ToastKind::Success, 0.0);
        stack.push("second", ToastKind::Error, 2.0);

        assert_eq!(stack.prune(3.5), 1);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.toasts()[0].message, "second");
    }
}
