//! Built-in console commands
//!
//! Registration order is the order `help` lists them in.

mod adjust;
mod bomb;
mod debug;
mod help;
mod shell;
mod solve;

use crate::error::RegistryError;
use crate::registry::{CommandDescriptor, CommandRegistry, Tier};

/// Registry with every built-in command
pub fn builtin_registry() -> Result<CommandRegistry, RegistryError> {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry)?;
    Ok(registry)
}

pub fn register_builtins(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    let standard: Vec<CommandDescriptor> = vec![
        CommandDescriptor::new(
            "help",
            "help [command]",
            "Display a list of commands, or more information of a certain command.",
            help::help,
        ),
        CommandDescriptor::new("clear", "clear", "Clear the console window.", shell::clear),
        CommandDescriptor::new("exit", "exit", "Close the command line window.", shell::exit),
        CommandDescriptor::new(
            "detonate",
            "detonate [cause]",
            "Detonate the currently held bomb. Optionally, include a cause of explosion.",
            bomb::detonate,
        ),
        CommandDescriptor::new(
            "causestrike",
            "causestrike [reason]",
            "Cause a strike on the currently held bomb. Optionally, include a reason for the strike.",
            bomb::cause_strike,
        ),
        CommandDescriptor::new(
            "time",
            "time <set|add|subtract> <number><ms|s|m|h|d|w|y> [<number2><unit>...]",
            "Change the time of the currently held bomb.",
            adjust::time,
        )
        .aliases(&["t"])
        .disables_leaderboard("achieve a faster time"),
        CommandDescriptor::new(
            "strikes",
            "strikes <set|add|subtract> <strikes>",
            "Change the current strike count on the currently held bomb.",
            adjust::strikes,
        )
        .aliases(&["strike", "s"])
        .disables_leaderboard("achieve a faster time"),
        CommandDescriptor::new(
            "strikelimit",
            "strikelimit <set|add|subtract> <strikes>",
            "Change the strike limit of the currently held bomb.",
            adjust::strike_limit,
        )
        .aliases(&["maxstrikes", "sl", "ms"])
        .disables_leaderboard("increase the strike limit"),
        CommandDescriptor::new(
            "solve",
            "solve",
            "Solve the currently selected module.",
            solve::solve,
        )
        .disables_leaderboard("solve a module"),
        CommandDescriptor::new(
            "solvebomb",
            "solvebomb",
            "Solve the currently held bomb.",
            solve::solve_bomb,
        )
        .disables_leaderboard("solve a bomb"),
        CommandDescriptor::new(
            "pause",
            "pause",
            "Pause the timer of the currently held bomb.",
            bomb::pause,
        )
        .disables_leaderboard("pause the timer"),
        CommandDescriptor::new(
            "unpause",
            "unpause",
            "Unpause the timer of the currently held bomb.",
            bomb::unpause,
        ),
        CommandDescriptor::new(
            "turn",
            "turn",
            "Turn the bomb over to the opposite face.",
            bomb::turn,
        )
        .aliases(&["flip", "rotate"]),
    ];

    for command in standard {
        registry.register(Tier::Standard, command)?;
    }

    registry.register(
        Tier::Privileged,
        CommandDescriptor::new(
            "checkactive",
            "checkactive",
            "Display debug information about the currently held bomb.",
            debug::check_active,
        ),
    )?;

    Ok(())
}
