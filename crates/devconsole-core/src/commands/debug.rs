use crate::context::CommandContext;
use crate::error::CommandResult;

pub(super) fn check_active(ctx: &mut CommandContext<'_>, _: &str) -> CommandResult {
    if !ctx.session.is_active() {
        ctx.log.info("No bomb detected.");
        return Ok(());
    }

    let mut text = format!(
        "Bomb(s) are active. Count: {}.",
        ctx.session.bombs().len()
    );
    let held = ctx
        .host
        .bombs
        .held_bomb()
        .map_or_else(|| "N/A".to_string(), |bomb| bomb.to_string());
    text.push_str(&format!("\n     Currently held bomb: {}.", held));

    let focused = ctx
        .host
        .bombs
        .focused_module()
        .and_then(|id| ctx.session.module(id))
        .map_or_else(|| "N/A".to_string(), |module| module.name.clone());
    text.push_str(&format!("\n     Currently focused module: {}.", focused));

    ctx.log.info(text);
    Ok(())
}
