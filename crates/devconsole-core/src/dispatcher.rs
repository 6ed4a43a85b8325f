//! Command Dispatcher
//!
//! Turns a raw input line into a command invocation:
//! - chat-prefixed lines go to the chat bridge untouched (debug mode only)
//! - the first word is resolved in the standard tier, then the privileged tier
//! - the handler runs with the rest of the line, casing preserved
//!
//! Every invocation is audited to the console log, except `clear` so the view
//! stays empty after clearing. Handler failures, including panics, are caught
//! here and reported as log entries.

use crate::context::CommandContext;
use crate::error::CommandError;
use crate::log_entry::LogEntry;
use crate::registry::{CommandDescriptor, Tier};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Name the console uses when relaying chat commands
pub const CHAT_HANDLE: &str = "CommandLine";

/// Command exempt from the audit line
pub const CLEAR_COMMAND: &str = "clear";

/// What happened to a processed line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    /// Blank line, nothing done
    Empty,
    /// Forwarded to the chat bridge
    Relayed,
    Executed { name: String, tier: Tier },
    Unknown { token: String },
}

/// Split a trimmed line into the command word and the trimmed remainder
pub fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, remainder)) => (word, remainder.trim()),
        None => (line, ""),
    }
}

/// Process one raw input line against the registry in `ctx`
pub fn process(raw: &str, ctx: &mut CommandContext<'_>) -> Dispatched {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Dispatched::Empty;
    }

    if ctx.privileged && trimmed.starts_with(ctx.chat_prefix) {
        relay_chat(raw, ctx);
        return Dispatched::Relayed;
    }

    let (word, remainder) = split_command(trimmed);
    let registry = ctx.registry;

    if let Some(command) = registry.resolve(word, Tier::Standard) {
        if command.name != CLEAR_COMMAND {
            ctx.log.info(format!("Command sent: {}", raw));
        }
        invoke(command, ctx, remainder);
        return Dispatched::Executed {
            name: command.name.clone(),
            tier: Tier::Standard,
        };
    }

    if ctx.privileged {
        if let Some(command) = registry.resolve(word, Tier::Privileged) {
            ctx.log.info(format!("Experimental command sent: {}", raw));
            invoke(command, ctx, remainder);
            return Dispatched::Executed {
                name: command.name.clone(),
                tier: Tier::Privileged,
            };
        }
    }

    let token = word.to_lowercase();
    log::debug!("Unknown command '{}'", token);
    ctx.log.info(format!("Command sent: {}", raw));
    report(
        ctx,
        &CommandError::Resolution {
            token: token.clone(),
        },
    );
    Dispatched::Unknown { token }
}

fn relay_chat(line: &str, ctx: &mut CommandContext<'_>) {
    ctx.log.info(format!("Chat command sent: {}", line));
    let result = match ctx.host.chat.as_mut() {
        Some(chat) => chat.relay(CHAT_HANDLE, None, line),
        None => {
            ctx.log.error("Chat bridge is not available.");
            return;
        }
    };
    if let Err(e) = result {
        log::debug!("Chat relay failed: {}", e);
        report(ctx, &CommandError::HandlerFault(e.to_string()));
    }
}

fn invoke(command: &CommandDescriptor, ctx: &mut CommandContext<'_>, remainder: &str) {
    log::debug!("Invoking '{}' with '{}'", command.name, remainder);
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| command.invoke(ctx, remainder)));
    match outcome {
        Ok(Ok(())) => {}
        Ok(Err(err)) => report(ctx, &err),
        Err(payload) => {
            let detail = panic_detail(payload.as_ref());
            log::debug!("Command '{}' panicked: {}", command.name, detail);
            report(ctx, &CommandError::HandlerFault(detail));
        }
    }
}

fn report(ctx: &CommandContext<'_>, err: &CommandError) {
    ctx.log.submit(LogEntry::new(err.to_string(), err.severity()));
}

fn panic_detail(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_command_preserves_remainder_casing() {
        assert_eq!(split_command("detonate Big   Boom"), ("detonate", "Big   Boom"));
        assert_eq!(split_command("help"), ("help", ""));
        assert_eq!(split_command("time\tadd 1m"), ("time", "add 1m"));
    }

    #[test]
    fn test_panic_detail_extracts_message() {
        let payload: Box<dyn Any + Send> = Box::new("kaboom");
        assert_eq!(panic_detail(payload.as_ref()), "kaboom");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_detail(payload.as_ref()), "owned");

        let payload: Box<dyn Any + Send> = Box::new(42);
        assert_eq!(panic_detail(payload.as_ref()), "unknown failure");
    }
}
