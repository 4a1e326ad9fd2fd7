//! CLEAR command

use webterm_plugin::prelude::*;

pub struct Clear;

static CLEAR_EXAMPLES: [&str; 1] = ["clear"];

impl CommandPlugin for Clear {
    fn meta(&self) -> CommandMeta {
        CommandMeta {
            name: "clear",
            description: "Clears all text from the terminal display.",
            usage: "clear",
            examples: &CLEAR_EXAMPLES,
        }
    }

    fn detect(&self, line: &str) -> bool {
        line.trim().eq_ignore_ascii_case("clear")
    }

    fn execute(&self, _line: &str, ctx: &mut ShellContext<'_>) -> Result<(), TermError> {
        ctx.clear();
        Ok(())
    }
}
