//! Command Registry
//!
//! Ordered, declarative table of console commands. Commands live in one of two
//! tiers: the standard tier, always available, and the privileged tier, only
//! consulted when the console runs in debug mode.

use crate::context::CommandContext;
use crate::error::{CommandResult, RegistryError};
use std::fmt;

/// Command handler, invoked with the argument remainder of the input line
pub type Handler = Box<dyn Fn(&mut CommandContext<'_>, &str) -> CommandResult + Send + Sync>;

/// Which table a command lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Standard,
    Privileged,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::Privileged => f.write_str("privileged"),
        }
    }
}

/// A single console command
pub struct CommandDescriptor {
    pub name: String,
    pub aliases: Vec<String>,
    pub usage: String,
    pub help: String,
    /// Set when using the command can disable the leaderboard, e.g. "solve a module"
    pub leaderboard_impact_reason: Option<String>,
    tier: Tier,
    handler: Handler,
}

impl CommandDescriptor {
    pub fn new<F>(name: &str, usage: &str, help: &str, handler: F) -> Self
    where
        F: Fn(&mut CommandContext<'_>, &str) -> CommandResult + Send + Sync + 'static,
    {
        Self {
            name: name.to_lowercase(),
            aliases: Vec::new(),
            usage: usage.to_string(),
            help: help.to_string(),
            leaderboard_impact_reason: None,
            tier: Tier::Standard,
            handler: Box::new(handler),
        }
    }

    pub fn aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|a| a.to_lowercase()).collect();
        self
    }

    pub fn disables_leaderboard(mut self, reason: &str) -> Self {
        self.leaderboard_impact_reason = Some(reason.to_string());
        self
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn is_privileged(&self) -> bool {
        self.tier == Tier::Privileged
    }

    /// Case-insensitive match against the name or any alias
    pub fn matches(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.name == token || self.aliases.iter().any(|alias| *alias == token)
    }

    pub fn invoke(&self, ctx: &mut CommandContext<'_>, remainder: &str) -> CommandResult {
        (self.handler)(ctx, remainder)
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("usage", &self.usage)
            .field("tier", &self.tier)
            .finish_non_exhaustive()
    }
}

/// Both command tiers, in registration order
#[derive(Debug, Default)]
pub struct CommandRegistry {
    standard: Vec<CommandDescriptor>,
    privileged: Vec<CommandDescriptor>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command to a tier
    ///
    /// Fails when the name or an alias is already taken in that tier.
    pub fn register(
        &mut self,
        tier: Tier,
        mut descriptor: CommandDescriptor,
    ) -> Result<(), RegistryError> {
        for token in descriptor.tokens() {
            if token.is_empty() || token.contains(char::is_whitespace) {
                return Err(RegistryError::InvalidName(token.to_string()));
            }
        }

        let mut own: Vec<&str> = Vec::new();
        for token in descriptor.tokens() {
            if own.contains(&token) || self.commands(tier).iter().any(|c| c.matches(token)) {
                return Err(RegistryError::NameCollision {
                    name: token.to_string(),
                    tier,
                });
            }
            own.push(token);
        }

        log::debug!("Registering {} command '{}'", tier, descriptor.name);
        descriptor.tier = tier;
        match tier {
            Tier::Standard => self.standard.push(descriptor),
            Tier::Privileged => self.privileged.push(descriptor),
        }
        Ok(())
    }

    /// First command in `tier` whose name or alias matches `token`
    pub fn resolve(&self, token: &str, tier: Tier) -> Option<&CommandDescriptor> {
        self.commands(tier).iter().find(|c| c.matches(token))
    }

    /// Resolve in the standard tier, then in the privileged tier if allowed
    pub fn lookup(&self, token: &str, privileged: bool) -> Option<&CommandDescriptor> {
        self.resolve(token, Tier::Standard).or_else(|| {
            if privileged {
                self.resolve(token, Tier::Privileged)
            } else {
                None
            }
        })
    }

    pub fn commands(&self, tier: Tier) -> &[CommandDescriptor] {
        match tier {
            Tier::Standard => &self.standard,
            Tier::Privileged => &self.privileged,
        }
    }

    pub fn len(&self) -> usize {
        self.standard.len() + self.privileged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop(name: &str) -> CommandDescriptor {
        CommandDescriptor::new(name, name, "does nothing", |_, _| Ok(()))
    }

    #[test]
    fn test_resolve_by_name_and_alias_case_insensitive() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Tier::Standard, noop("time").aliases(&["t"]))
            .unwrap();

        assert_eq!(registry.resolve("TIME", Tier::Standard).map(|c| c.name.as_str()), Some("time"));
        assert_eq!(registry.resolve("T", Tier::Standard).map(|c| c.name.as_str()), Some("time"));
        assert!(registry.resolve("tim", Tier::Standard).is_none());
    }

    #[test]
    fn test_alias_collision_is_rejected() {
        let mut registry = CommandRegistry::new();
        registry
            .register(Tier::Standard, noop("strikes").aliases(&["s"]))
            .unwrap();

        let err = registry
            .register(Tier::Standard, noop("solve").aliases(&["S"]))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::NameCollision {
                name: "s".to_string(),
                tier: Tier::Standard
            }
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_collision_within_own_aliases_is_rejected() {
        let mut registry = CommandRegistry::new();
        assert!(
            registry
                .register(Tier::Standard, noop("turn").aliases(&["turn"]))
                .is_err()
        );
    }

    #[test]
    fn test_tiers_are_independent_namespaces() {
        let mut registry = CommandRegistry::new();
        registry.register(Tier::Standard, noop("check")).unwrap();
        registry.register(Tier::Privileged, noop("check")).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_lookup_only_reaches_privileged_when_allowed() {
        let mut registry = CommandRegistry::new();
        registry.register(Tier::Privileged, noop("checkactive")).unwrap();

        assert!(registry.lookup("checkactive", false).is_none());
        let found = registry.lookup("checkactive", true).unwrap();
        assert!(found.is_privileged());
    }

    #[test]
    fn test_invalid_names_are_rejected() {
        let mut registry = CommandRegistry::new();
        assert!(registry.register(Tier::Standard, noop("")).is_err());
        assert!(registry.register(Tier::Standard, noop("two words")).is_err());
    }

    #[test]
    fn test_registration_order_is_kept() {
        let mut registry = CommandRegistry::new();
        for name in ["help", "clear", "exit"] {
            registry.register(Tier::Standard, noop(name)).unwrap();
        }
        let names: Vec<&str> = registry
            .commands(Tier::Standard)
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["help", "clear", "exit"]);
    }
}
