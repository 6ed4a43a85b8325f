//! Force-solving modules

use crate::context::CommandContext;
use crate::error::{CommandError, CommandResult, HostError};
use crate::host::{ModuleId, ModuleKind};

pub(super) fn solve(ctx: &mut CommandContext<'_>, _: &str) -> CommandResult {
    ctx.require_active("Can't solve module")?;
    ctx.require_held("Hold the bomb that contains the module you wish to solve.")?;
    let id = ctx.require_focused("Focus on the module that you wish to solve.")?;

    let module = ctx
        .session
        .module(id)
        .cloned()
        .ok_or_else(|| CommandError::unmet("Can't solve module: the focused module is unknown."))?;

    if ctx.host.bombs.is_solved(id)? {
        return Err(CommandError::unmet(
            "Can't solve module: module already solved.",
        ));
    }
    match module.kind {
        ModuleKind::Needy => Err(CommandError::unmet(
            "Can't solve module: needy modules cannot be solved.",
        )),
        ModuleKind::Empty => Err(CommandError::unmet(
            "Can't solve module: empty slots cannot be solved.",
        )),
        ModuleKind::Timer => Err(CommandError::unmet(
            "Can't solve module: the timer cannot be solved.",
        )),
        ModuleKind::Regular if !module.solvable => Err(CommandError::unmet(
            "Can't solve module: module is not solvable.",
        )),
        ModuleKind::Regular => {
            force_solve(ctx, id)?;
            log::info!("Solved module: {}", module.name);
            ctx.log.info(format!("Solved module \"{}\".", module.name));
            Ok(())
        }
    }
}

pub(super) fn solve_bomb(ctx: &mut CommandContext<'_>, _: &str) -> CommandResult {
    ctx.require_active("Can't solve bomb")?;
    let bomb = ctx.require_held("Hold the bomb that you wish to solve.")?;

    ctx.disable_leaderboard();

    let targets: Vec<(ModuleId, String)> = ctx
        .session
        .modules_on(bomb, true)
        .map(|m| (m.id, m.name.clone()))
        .collect();

    let mut solved = 0;
    for (id, name) in targets {
        if ctx.host.bombs.is_solved(id)? {
            continue;
        }
        match force_solve(ctx, id) {
            Ok(()) => solved += 1,
            Err(e) => {
                log::debug!("Failed to force solve {}: {}", name, e);
                ctx.log
                    .error(format!("Exception while force solving module \"{}\": {}", name, e));
            }
        }
    }
    log::info!("Solved {} module(s) on bomb {}", solved, bomb);
    ctx.log.info(format!(
        "Solved {} module{} on bomb {}.",
        solved,
        if solved == 1 { "" } else { "s" },
        bomb
    ));
    Ok(())
}

fn force_solve(ctx: &mut CommandContext<'_>, id: ModuleId) -> CommandResult {
    ctx.disable_leaderboard();
    ctx.host
        .force_solve
        .as_mut()
        .ok_or(HostError::Unavailable)?
        .force_solve(id)?;
    Ok(())
}
