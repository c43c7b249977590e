//! Built-in command definitions registered at startup.

use dbot_core::{CommandOption, CommandSpec};

pub const TEST_COMMAND: &str = "test";
pub const NEWBET_COMMAND: &str = "newbet";

/// Commands registered at startup, in registration order.
pub fn default_command_specs() -> Vec<CommandSpec> {
    vec![
        CommandSpec::new(TEST_COMMAND, "just a test"),
        CommandSpec::new(NEWBET_COMMAND, "create new bet")
            .option(CommandOption::string("title", "What are we bettin on, boys"))
            .option(CommandOption::string("outcome-1", "Outcome option 1"))
            .option(CommandOption::string("outcome-2", "Outcome option 2")),
    ]
}
