//! Toast notifications raised by the page controller.
//!
//! DESIGN
//! ======
//! A small FIFO queue of notices. Presentation and auto-dismiss timing live in
//! `components::toast_stack`; this module only tracks what is visible.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// How long a toast stays on screen before dismissing itself.
pub const NOTICE_TIMEOUT_MS: u32 = 5_000;

/// Oldest notices are dropped beyond this many.
pub const MAX_NOTICES: usize = 3;

/// Visual tone of a notice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeTone {
    #[default]
    Info,
    Destructive,
}

/// Fixed copy for a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeText {
    pub title: &'static str,
    pub description: &'static str,
    pub tone: NoticeTone,
}

/// A notice currently on screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: NoticeText,
}

/// Visible notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub items: Vec<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Show a notice and return its id.
    pub fn push(&mut self, text: NoticeText) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice { id, text });
        if self.items.len() > MAX_NOTICES {
            let overflow = self.items.len() - MAX_NOTICES;
            self.items.drain(..overflow);
        }
        id
    }

    /// Remove a notice. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }
}
