//! Thread-local context tracking for crash reports.
//!
//! Records which command is running and which input is being applied, so a
//! crash report can say what the calculator was doing. Guards restore the
//! previous context on drop.

use crate::core::InputField;
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Updates applied in this process (atomic for thread-safety)
static UPDATES_APPLIED: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<CommandContext> = const { RefCell::new(CommandContext::new()) };
}

/// Context snapshot for the current operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommandContext {
    pub command: Option<&'static str>,
    /// Input being applied when the crash happened
    pub current_field: Option<InputField>,
}

impl CommandContext {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            command: None,
            current_field: None,
        }
    }
}

/// RAII guard for restoring context on drop.
pub struct ContextGuard {
    previous: CommandContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous;
        });
    }
}

/// Set the running command. Returns a guard that restores the previous one.
#[must_use]
pub fn set_command(command: &'static str) -> ContextGuard {
    update_context(|ctx| ctx.command = Some(command))
}

/// Set the input currently being applied.
#[must_use]
pub fn set_current_field(field: InputField) -> ContextGuard {
    update_context(|ctx| ctx.current_field = Some(field))
}

fn update_context(change: impl FnOnce(&mut CommandContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = *ctx.borrow();
        change(&mut *ctx.borrow_mut());
        ContextGuard { previous }
    })
}

pub fn increment_updates() {
    UPDATES_APPLIED.fetch_add(1, Ordering::Relaxed);
}

#[must_use]
pub fn get_updates_applied() -> usize {
    UPDATES_APPLIED.load(Ordering::Relaxed)
}

/// Called by the panic hook to include context in crash reports.
#[must_use]
pub fn get_current_context() -> CommandContext {
    CURRENT_CONTEXT.with(|ctx| *ctx.borrow())
}

/// Reset the current thread's context to empty.
pub fn reset_context() {
    CURRENT_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = CommandContext::new();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_guard_restores_previous() {
        reset_context();

        let _command = set_command("session");
        assert_eq!(get_current_context().command, Some("session"));

        {
            let _field = set_current_field(InputField::HourlyWage);
            assert_eq!(
                get_current_context().current_field,
                Some(InputField::HourlyWage)
            );
        }

        let context = get_current_context();
        assert_eq!(context.command, Some("session"));
        assert_eq!(context.current_field, None);
    }

    #[test]
    fn test_update_counter_increments() {
        let before = get_updates_applied();
        increment_updates();
        assert!(get_updates_applied() > before);
    }
}
