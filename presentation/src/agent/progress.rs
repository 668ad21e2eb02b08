//! Progress reporting for the agent loop

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use sysprobe_application::{AgentProgressNotifier, ConfirmationError, ModelError};
use sysprobe_domain::{Observation, ToolCall, ToolError};

/// Observations longer than this are cut on screen. The model still sees all of it.
const MAX_OBSERVATION_LINES: usize = 40;

/// Prints the ReAct cycle to the console, with a spinner while the model thinks.
pub struct ConsoleProgress {
    spinner: Mutex<Option<ProgressBar>>,
    show_spinner: bool,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_spinner: true,
        }
    }

    /// Plain text only, for output that is not a terminal.
    pub fn without_spinner() -> Self {
        Self {
            spinner: Mutex::new(None),
            show_spinner: false,
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn stop_spinner(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentProgressNotifier for ConsoleProgress {
    fn on_thinking_start(&self) {
        if !self.show_spinner {
            println!("{}", "Thinking...".dimmed());
            return;
        }
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message("Thinking...");
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut guard) = self.spinner.lock() {
            *guard = Some(pb);
        }
    }

    fn on_thinking_end(&self) {
        self.stop_spinner();
    }

    fn on_thought(&self, thought: &str) {
        println!();
        println!("{} {}", "Thought:".cyan().bold(), thought.trim());
    }

    fn on_tool_call(&self, call: &ToolCall) {
        println!();
        println!("{} {}", "Action:".blue().bold(), format_tool_call(call));
    }

    fn on_tool_cancelled(&self, call: &ToolCall) {
        println!("{} {}", "✗".red(), format!("{} cancelled", call.name).dimmed());
    }

    fn on_tool_error(&self, call: &ToolCall, error: &ToolError) {
        println!("{} {} {}", "✗".red(), call.name.red(), error.code().dimmed());
    }

    fn on_observation(&self, _call: &ToolCall, observation: &Observation) {
        println!("{}", "Observation:".magenta().bold());
        println!("{}", clip_lines(observation.as_str(), MAX_OBSERVATION_LINES).dimmed());
    }

    fn on_confirmation_failed(&self, error: &ConfirmationError) {
        println!(
            "{} {}",
            "Confirmation unavailable, skipping remaining tool calls:".yellow(),
            error
        );
    }

    fn on_final_answer(&self, answer: &str) {
        self.stop_spinner();
        if answer.trim().is_empty() {
            return;
        }
        println!();
        println!("{}", "Final Answer:".green().bold());
        println!("{}", answer.trim());
        println!();
    }

    fn on_model_error(&self, error: &ModelError) {
        self.stop_spinner();
        println!("{} {}", "Model request failed:".red().bold(), error.to_string().red());
    }
}

/// `name arguments`, with blank arguments shown as `{}`.
fn format_tool_call(call: &ToolCall) -> String {
    let args = call.arguments.trim();
    let args = if args.is_empty() { "{}" } else { args };
    format!("{} {}", call.name, args)
}

/// First `max` lines of `text`, plus a count of what was left out.
fn clip_lines(text: &str, max: usize) -> String {
    let total = text.lines().count();
    if total <= max {
        return text.trim_end().to_string();
    }
    let head: Vec<&str> = text.lines().take(max).collect();
    format!("{}\n... ({} more lines)", head.join("\n"), total - max)
}
