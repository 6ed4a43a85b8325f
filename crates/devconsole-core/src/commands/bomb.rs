//! Commands acting on the held bomb as a whole

use crate::context::CommandContext;
use crate::error::{CommandError, CommandResult, HostError};

pub(super) fn detonate(ctx: &mut CommandContext<'_>, cause: &str) -> CommandResult {
    ctx.require_active("Can't detonate")?;
    let bomb = ctx.require_held("Hold the bomb you wish to detonate.")?;

    let reason = if cause.is_empty() { "Detonate Command" } else { cause };
    if cause.is_empty() {
        ctx.log.info("Detonated bomb.");
    } else {
        ctx.log.info(format!("Detonated bomb with reason \"{}\".", cause));
    }
    log::info!("Detonating bomb {}", bomb);
    ctx.host.bombs.detonate(bomb, reason)?;
    Ok(())
}

pub(super) fn cause_strike(ctx: &mut CommandContext<'_>, reason: &str) -> CommandResult {
    ctx.require_active("Can't cause a strike")?;
    let bomb = ctx.require_held("Hold the bomb you wish to cause a strike on.")?;

    let cause = if reason.is_empty() { "Strike Command" } else { reason };
    if reason.is_empty() {
        ctx.log.info("Caused a strike.");
    } else {
        ctx.log.info(format!("Caused a strike with reason \"{}\".", reason));
    }
    log::info!("Causing strike on bomb {}", bomb);
    ctx.host.bombs.cause_strike(bomb, cause)?;
    Ok(())
}

pub(super) fn pause(ctx: &mut CommandContext<'_>, _: &str) -> CommandResult {
    ctx.require_active("Can't pause bomb")?;
    let bomb = ctx.require_held("Hold the bomb that you wish to pause.")?;

    if !ctx.host.bombs.is_timer_running(bomb)? {
        return Err(CommandError::unmet(
            "Can't pause bomb: held bomb is already paused.",
        ));
    }
    ctx.disable_leaderboard();
    ctx.host.bombs.pause_timer(bomb)?;
    log::info!("Paused the timer of bomb {}", bomb);
    ctx.log.info("Paused the bomb timer.");
    Ok(())
}

pub(super) fn unpause(ctx: &mut CommandContext<'_>, _: &str) -> CommandResult {
    ctx.require_active("Can't unpause bomb")?;
    let bomb = ctx.require_held("Hold the bomb that you wish to unpause.")?;

    if ctx.host.bombs.is_timer_running(bomb)? {
        return Err(CommandError::unmet(
            "Can't unpause bomb: held bomb is not paused.",
        ));
    }
    ctx.host.bombs.unpause_timer(bomb)?;
    log::info!("Unpaused the timer of bomb {}", bomb);
    ctx.log.info("Unpaused the bomb timer.");
    Ok(())
}

/// Starts the turn animation on the host; teardown cancels it
pub(super) fn turn(ctx: &mut CommandContext<'_>, _: &str) -> CommandResult {
    ctx.require_active("Can't turn bomb")?;
    let bomb = ctx.require_held("Hold the bomb you wish to turn.")?;

    let runner = ctx.host.tasks.as_mut().ok_or(HostError::Unavailable)?;
    let task = runner.start_turn(bomb)?;
    ctx.session.track_task(task);
    log::info!("Turning bomb {}", bomb);
    ctx.log.info(format!("Turning bomb {} over.", bomb));
    Ok(())
}
