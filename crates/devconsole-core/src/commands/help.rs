use crate::context::CommandContext;
use crate::error::{CommandError, CommandResult};
use crate::registry::{CommandDescriptor, Tier};

const LEADERBOARD_MARKER: char = '*';
const PRIVILEGED_MARKER: char = '†';

pub(super) fn help(ctx: &mut CommandContext<'_>, remainder: &str) -> CommandResult {
    let text = match remainder.split_whitespace().next() {
        None => reference(ctx),
        Some(name) => detail(ctx, name)?,
    };
    ctx.log.info(text);
    Ok(())
}

/// Listing of every command plus a legend for the markers in use
fn reference(ctx: &CommandContext<'_>) -> String {
    let mut text = String::from("Command Reference:");
    let mut leaderboard_used = false;
    let mut privileged_used = false;

    let mut tiers = vec![Tier::Standard];
    if ctx.privileged {
        tiers.push(Tier::Privileged);
    }

    for tier in tiers {
        for command in ctx.registry.commands(tier) {
            text.push_str(&format!("\n    {} - {}", command.usage, command.help));
            if command.is_privileged() {
                text.push(PRIVILEGED_MARKER);
                privileged_used = true;
            }
            if command.leaderboard_impact_reason.is_some() {
                text.push(LEADERBOARD_MARKER);
                leaderboard_used = true;
            }
        }
    }

    if privileged_used {
        text.push_str(&format!(
            "\n    {0} A dagger ({0}) indicates that the command is a debug mode-only command.",
            PRIVILEGED_MARKER
        ));
    }
    if leaderboard_used {
        text.push_str(&format!(
            "\n    {0} An asterisk ({0}) indicates that the command will disable the mission leaderboard.",
            LEADERBOARD_MARKER
        ));
    }
    if ctx.privileged && ctx.chat_available() {
        text.push_str(&format!(
            "\n    {0} Chat commands can be sent using the '{0}' prefix.",
            ctx.chat_prefix
        ));
    }
    text
}

fn detail(ctx: &CommandContext<'_>, name: &str) -> Result<String, CommandError> {
    let command: &CommandDescriptor =
        ctx.registry.lookup(name, ctx.privileged).ok_or_else(|| {
            CommandError::Validation(format!(
                "Command \"{}\" does not exist. Use the \"help\" command for a list of commands.",
                name
            ))
        })?;

    let mut text = format!("Command information for \"{}\":", name);
    text.push_str(&format!("\n    Name: {}", command.name));
    if !command.aliases.is_empty() {
        text.push_str(&format!("\n    Aliases: {}", command.aliases.join(", ")));
    }
    text.push_str(&format!("\n    Help String: {}", command.help));
    text.push_str(&format!("\n    Usage Info: {}", command.usage));
    if let Some(reason) = &command.leaderboard_impact_reason {
        text.push_str(&format!(
            "\n    {} This command will disable the leaderboard if used to {}.",
            LEADERBOARD_MARKER, reason
        ));
    }
    if command.is_privileged() {
        text.push_str(&format!(
            "\n    {} This command is only available in debug mode.",
            PRIVILEGED_MARKER
        ));
    }
    Ok(text)
}
