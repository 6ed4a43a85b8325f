//! Commands acting on the console itself

use crate::context::{CommandContext, ShellRequest};
use crate::error::CommandResult;

pub(super) fn clear(ctx: &mut CommandContext<'_>, _: &str) -> CommandResult {
    ctx.buffer.clear();
    Ok(())
}

pub(super) fn exit(ctx: &mut CommandContext<'_>, _: &str) -> CommandResult {
    ctx.request(ShellRequest::Close);
    Ok(())
}
