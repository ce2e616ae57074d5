//! Transient notices shared via context.
//!
//! Guard denials and one-off auth events surface here; the layout renders
//! them as dismissable alerts. This replaces the blocking modals of the old
//! portal without blocking navigation.

use dioxus::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Global notices state shared via context
#[derive(Clone, Copy)]
pub struct NoticeContext {
    notices: Signal<Vec<Notice>>,
    next_id: Signal<u64>,
}

impl NoticeContext {
    pub fn list(&self) -> Vec<Notice> {
        (self.notices)()
    }

    /// Queue a notice. Duplicate consecutive notices collapse so a guard
    /// re-evaluating does not stack the same warning.
    pub fn warn(&self, title: impl Into<String>, body: impl Into<String>) {
        let title = title.into();
        let body = body.into();
        let mut notices = self.notices;
        let mut next_id = self.next_id;
        let id = next_id() + 1;
        next_id.set(id);
        notices.with_mut(|list| {
            if list
                .last()
                .is_some_and(|last| last.title == title && last.body == body)
            {
                return;
            }
            list.push(Notice { id, title, body });
        });
    }

    pub fn dismiss(&self, id: u64) {
        let mut notices = self.notices;
        notices.with_mut(|list| list.retain(|notice| notice.id != id));
    }
}

/// Initialize notices context provider - call once at app root
pub fn use_notice_provider() {
    let notices = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    use_context_provider(|| NoticeContext { notices, next_id });
}

/// Get notices context - use in any component
pub fn use_notices() -> NoticeContext {
    use_context::<NoticeContext>()
}
