//! Console adapter for user turns, backed by rustyline.

use colored::Colorize;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use sysprobe_application::{AgentSettings, InputError, UserInput, UserInputPort};
use sysprobe_domain::Platform;
use tracing::debug;

const PROMPT: &str = "> ";

/// Line editor for the `> ` prompt. History lives for the session only.
pub struct ConsoleInput {
    editor: DefaultEditor,
}

impl ConsoleInput {
    pub fn new() -> Result<Self, InputError> {
        let editor = DefaultEditor::new().map_err(|e| InputError::Io(e.to_string()))?;
        Ok(Self { editor })
    }
}

impl UserInputPort for ConsoleInput {
    fn read_input(&mut self) -> Result<UserInput, InputError> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty()
                    && let Err(e) = self.editor.add_history_entry(line.as_str())
                {
                    debug!(error = %e, "Failed to add history entry");
                }
                Ok(UserInput::Line(line))
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                Ok(UserInput::Interrupted)
            }
            Err(ReadlineError::Eof) => Ok(UserInput::EndOfInput),
            Err(err) => Err(InputError::Io(err.to_string())),
        }
    }
}

/// Print the session banner.
pub fn print_welcome(settings: &AgentSettings, platform: &Platform) {
    println!();
    println!("{}", "╭─────────────────────────────────────────────╮".cyan());
    println!("{}", "│  sysprobe - system diagnostics agent        │".cyan().bold());
    println!("{}", "╰─────────────────────────────────────────────╯".cyan());
    println!();
    for (label, value) in banner_lines(settings, platform) {
        println!("  {} {}", format!("{:<9}", label).dimmed(), value);
    }
    println!();
    println!(
        "Describe what you want to inspect. Type {} or {} to leave.",
        "exit".yellow(),
        "quit".yellow()
    );
    println!();
}

fn banner_lines(settings: &AgentSettings, platform: &Platform) -> Vec<(&'static str, String)> {
    vec![
        ("Model:", settings.model.clone()),
        ("Endpoint:", settings.base_url.clone()),
        ("Platform:", platform.to_string()),
        ("Allowed:", tool_list(&settings.allowed_tools, "all tools")),
        ("Denied:", tool_list(&settings.denied_tools, "none")),
    ]
}

fn tool_list<'a>(tools: impl IntoIterator<Item = &'a String>, empty: &str) -> String {
    let names: Vec<&str> = tools.into_iter().map(String::as_str).collect();
    if names.is_empty() {
        empty.to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_lines() {
        let settings = AgentSettings {
            api_key: "sk".to_string(),
            model: "deepseek-coder".to_string(),
            base_url: "https://api.deepseek.com/v1".to_string(),
            allowed_tools: Default::default(),
            denied_tools: ["wget".to_string(), "ss".to_string()].into_iter().collect(),
        };
        let lines = banner_lines(&settings, &Platform::Linux);

        assert_eq!(lines[0], ("Model:", "deepseek-coder".to_string()));
        assert_eq!(lines[2], ("Platform:", "linux".to_string()));
        assert_eq!(lines[3], ("Allowed:", "all tools".to_string()));
        assert_eq!(lines[4], ("Denied:", "ss, wget".to_string()));
    }
}
