use crate::ports::ConfirmPort;
use anyhow::Result;
use dialoguer::{Confirm, theme::ColorfulTheme};

/// Interactive yes/no prompt on the terminal.
pub struct ConsolePrompt;

impl ConsolePrompt {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsolePrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfirmPort for ConsolePrompt {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}

/// Non-interactive prompt that always returns a fixed answer; used for
/// scripted runs and tests.
pub struct ScriptedPrompt {
    answer: bool,
}

impl ScriptedPrompt {
    pub fn assume(answer: bool) -> Self {
        Self { answer }
    }
}

impl ConfirmPort for ScriptedPrompt {
    fn confirm(&self, _prompt: &str) -> Result<bool> {
        Ok(self.answer)
    }
}
