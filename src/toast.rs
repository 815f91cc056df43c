pub const TOAST_VISIBLE_MS: u32 = 3_000;
pub const TOAST_EXIT_MS: u32 = 300;
const TOAST_TOP_PX: usize = 100;
const TOAST_STACK_STEP_PX: usize = 64;

pub const TOAST_KEYFRAMES: &str = "
    @keyframes slideIn {
        from { transform: translateX(100%); opacity: 0; }
        to { transform: translateX(0); opacity: 1; }
    }

    @keyframes slideOut {
        from { transform: translateX(0); opacity: 1; }
        to { transform: translateX(100%); opacity: 0; }
    }
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "form-notice",
            Self::Error => "form-error",
        }
    }

    pub fn role(self) -> &'static str {
        match self {
            Self::Success => "status",
            Self::Error => "alert",
        }
    }

    fn background(self) -> &'static str {
        match self {
            Self::Success => "#48bb78",
            Self::Error => "#f56565",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    pub leaving: bool,
}

impl Toast {
    pub fn new(id: u64, kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            message: message.into(),
            leaving: false,
        }
    }

    /// Inline style for the banner at `slot` in the stack.
    pub fn style(&self, slot: usize) -> String {
        let top = TOAST_TOP_PX + slot * TOAST_STACK_STEP_PX;
        let animation = if self.leaving { "slideOut" } else { "slideIn" };

        format!(
            "position: fixed; top: {top}px; right: 20px; background: {}; color: white; \
             padding: 15px 25px; border-radius: 8px; box-shadow: 0 4px 12px rgba(0, 0, 0, 0.15); \
             z-index: 10000; animation: {animation} 0.3s ease forwards;",
            self.kind.background()
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn insert(&mut self, toast: Toast) {
        self.toasts.push(toast);
    }

    pub fn begin_exit(&mut self, id: u64) -> bool {
        match self.toasts.iter_mut().find(|toast| toast.id == id) {
            Some(toast) => {
                toast.leaving = true;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toasts_exit_then_disappear() {
        let mut queue = ToastQueue::default();
        queue.insert(Toast::new(1, ToastKind::Error, "Please enter your name"));
        queue.insert(Toast::new(2, ToastKind::Success, "Thank you for subscribing!"));

        assert!(queue.begin_exit(1));
        assert!(queue.toasts()[0].leaving);
        assert!(!queue.toasts()[1].leaving);

        assert!(queue.remove(1));
        assert_eq!(queue.toasts().len(), 1);
        assert_eq!(queue.toasts()[0].id, 2);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut queue = ToastQueue::default();

        assert!(!queue.begin_exit(7));
        assert!(!queue.remove(7));
    }

    #[test]
    fn style_reflects_kind_slot_and_phase() {
        let mut toast = Toast::new(1, ToastKind::Error, "oops");
        let entering = toast.style(0);
        assert!(entering.contains("top: 100px"));
        assert!(entering.contains("#f56565"));
        assert!(entering.contains("slideIn"));

        toast.leaving = true;
        let leaving = toast.style(2);
        assert!(leaving.contains("top: 228px"));
        assert!(leaving.contains("slideOut"));
    }
}
