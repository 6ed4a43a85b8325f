//! Time, strike and strike-limit adjustment

use crate::arguments::{
    adjust_count, adjust_time, format_time, parse_count, parse_duration, plural_strikes,
    split_mode, AdjustMode,
};
use crate::context::CommandContext;
use crate::error::CommandResult;

pub(super) fn time(ctx: &mut CommandContext<'_>, remainder: &str) -> CommandResult {
    let (mode, tokens) = split_mode(remainder)?;
    ctx.require_active("Can't change time")?;
    let bomb = ctx.require_held("Hold the bomb you wish to change the time of.")?;
    let amount = parse_duration(&tokens)?;

    let original = ctx.host.bombs.time_remaining(bomb)?;
    let Some(target) = adjust_time(mode, original, amount) else {
        return Ok(());
    };
    ctx.host.bombs.set_time_remaining(bomb, target)?;

    if target > original {
        ctx.disable_leaderboard();
    }

    if mode == AdjustMode::Set {
        log::info!("Set time of bomb {} to {}", bomb, target);
        ctx.log.info(format!("Set the timer to {}.", format_time(target)));
    } else {
        let signed = if mode == AdjustMode::Subtract { -amount } else { amount };
        log::info!("Changed time of bomb {} by {}", bomb, signed);
        ctx.log.info(format!(
            "{} {} {} the timer.",
            if signed > 0.0 { "Added" } else { "Subtracted" },
            format_time(signed),
            if signed > 0.0 { "to" } else { "from" },
        ));
    }
    Ok(())
}

pub(super) fn strikes(ctx: &mut CommandContext<'_>, remainder: &str) -> CommandResult {
    let (mode, tokens) = split_mode(remainder)?;
    ctx.require_active("Can't change current strike count")?;
    let bomb = ctx.require_held("Hold the bomb you wish to change the current strike count on.")?;
    let amount = parse_count(&tokens)?;

    let original = ctx.host.bombs.strike_count(bomb)?;
    let Some(target) = adjust_count(mode, original, amount) else {
        return Ok(());
    };
    ctx.host.bombs.set_strike_count(bomb, target)?;

    if target < original {
        ctx.disable_leaderboard();
    }

    log::info!("Strike count of bomb {}: {} -> {}", bomb, original, target);
    if mode == AdjustMode::Set {
        ctx.log.info(format!(
            "Set the current strike count to {}.",
            plural_strikes(u64::from(target))
        ));
    } else {
        ctx.log.info(describe_change(original, target, "the bomb"));
    }
    Ok(())
}

pub(super) fn strike_limit(ctx: &mut CommandContext<'_>, remainder: &str) -> CommandResult {
    let (mode, tokens) = split_mode(remainder)?;
    ctx.require_active("Can't change strike limit")?;
    let bomb = ctx.require_held("Hold the bomb you wish to change the strike limit on.")?;
    let amount = parse_count(&tokens)?;

    let original = ctx.host.bombs.strike_limit(bomb)?;
    let Some(target) = adjust_count(mode, original, amount) else {
        return Ok(());
    };
    ctx.host.bombs.set_strike_limit(bomb, target)?;

    if target > original {
        ctx.disable_leaderboard();
    }

    log::info!("Strike limit of bomb {}: {} -> {}", bomb, original, target);
    if mode == AdjustMode::Set {
        ctx.log.info(format!(
            "Set the strike limit to {}.",
            plural_strikes(u64::from(target))
        ));
    } else {
        ctx.log.info(describe_change(original, target, "the strike limit"));
    }
    Ok(())
}

fn describe_change(original: u32, target: u32, subject: &str) -> String {
    if target > original {
        format!(
            "Added {} to {}.",
            plural_strikes(u64::from(target - original)),
            subject
        )
    } else {
        format!(
            "Subtracted {} from {}.",
            plural_strikes(u64::from(original - target)),
            subject
        )
    }
}
