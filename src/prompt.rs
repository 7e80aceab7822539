//! Interactive collaborators: picker, line input and external editor
//!
//! The workflow only talks to the `Interaction` trait. `Terminal` is the real
//! implementation: it pipes candidates through a picker process (fzf by
//! default), reads answers from stdin and blocks on the editor process.

use std::io::{self, BufRead, Write};
use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, warn};

use crate::config::Config;
use crate::error::{Error, Result};

pub trait Interaction {
    /// Let the user pick one candidate; `None` when they abort or match nothing
    fn select(&mut self, prompt: &str, candidates: &[String]) -> Result<Option<String>>;

    /// Read one line of input, without its line terminator
    fn input(&mut self, prompt: &str) -> Result<String>;

    /// Open the editor on `path` and return once the user exits it
    fn edit(&mut self, path: &Path) -> Result<()>;
}

/// Interaction over the controlling terminal
pub struct Terminal {
    editor: Vec<String>,
    picker: Vec<String>,
}

impl Terminal {
    pub fn new(config: &Config) -> Self {
        Self {
            editor: config.editor.clone(),
            picker: config.picker.clone(),
        }
    }
}

impl Interaction for Terminal {
    fn select(&mut self, prompt: &str, candidates: &[String]) -> Result<Option<String>> {
        if candidates.is_empty() {
            return Ok(None);
        }

        let (program, args) = split_program(&self.picker);
        let mut command = Command::new(program);
        command.args(args);
        if program.ends_with("fzf") {
            command.arg("--prompt").arg(format!("{}> ", prompt));
        }

        let mut child = command
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Launch {
                program: program.to_string(),
                source,
            })?;

        if let Some(stdin) = child.stdin.as_mut() {
            stdin.write_all(candidates.join("\n").as_bytes())?;
        }
        let output = child.wait_with_output()?;
        if !output.status.success() || output.stdout.is_empty() {
            debug!("picker returned no selection ({})", output.status);
            return Ok(None);
        }

        let chosen = String::from_utf8_lossy(&output.stdout).trim_end_matches(['\r', '\n']).to_string();
        Ok(candidates.iter().find(|c| **c == chosen).cloned())
    }

    fn input(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(Error::InputClosed);
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn edit(&mut self, path: &Path) -> Result<()> {
        let (program, args) = split_program(&self.editor);
        let status = Command::new(program)
            .args(args)
            .arg(path)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::Launch {
                program: program.to_string(),
                source,
            })?;
        if !status.success() {
            warn!("editor {} exited with {}", program, status);
        }
        Ok(())
    }
}

fn split_program(command: &[String]) -> (&str, &[String]) {
    match command.split_first() {
        Some((program, args)) => (program.as_str(), args),
        None => ("", &[][..]),
    }
}

// === Prompt Helpers ===

/// Yes only on an explicit `y`
pub fn confirm<I: Interaction + ?Sized>(io: &mut I, prompt: &str) -> Result<bool> {
    let answer = io.input(prompt)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}

/// Block until the user presses Enter
pub fn wait_for_enter<I: Interaction + ?Sized>(io: &mut I, prompt: &str) -> Result<()> {
    io.input(prompt).map(|_| ())
}

/// Parse an hours value. Zero and negative values are accepted; NaN and
/// infinities are not, since they cannot be stored as JSON numbers.
pub fn parse_hours(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|h| h.is_finite())
}

/// Ask for an hours value until one parses
pub fn prompt_hours<I: Interaction + ?Sized>(io: &mut I, prompt: &str) -> Result<f64> {
    loop {
        let answer = io.input(prompt)?;
        match parse_hours(&answer) {
            Some(hours) => return Ok(hours),
            None => println!("Invalid input for hours. Please enter a number."),
        }
    }
}

/// Ask the user to confirm a day's total. Empty input accepts `floor`;
/// anything below `floor` is rejected and asked again.
pub fn confirm_total<I: Interaction + ?Sized>(io: &mut I, prompt: &str, floor: f64) -> Result<f64> {
    loop {
        let answer = io.input(prompt)?;
        if answer.trim().is_empty() {
            return Ok(floor);
        }
        match parse_hours(&answer) {
            Some(total) if total < floor => {
                println!(
                    "The total number of hours worked cannot be less than {}.",
                    crate::util::format_hours(floor)
                );
            }
            Some(total) => return Ok(total),
            None => println!("Invalid input for total hours."),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::VecDeque;
    use std::path::PathBuf;

    /// Replays scripted answers; running out of script reads as closed input
    #[derive(Default)]
    pub struct ScriptedInteraction {
        selections: VecDeque<Option<String>>,
        inputs: VecDeque<String>,
        /// Text appended to a file each time the editor is opened on it
        pub editor_text: Option<String>,
        /// Candidate lists offered, in order
        pub offered: Vec<Vec<String>>,
        /// Paths the editor was opened on, in order
        pub edited: Vec<PathBuf>,
    }

    impl ScriptedInteraction {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn pick(mut self, choice: &str) -> Self {
            self.selections.push_back(Some(choice.to_string()));
            self
        }

        pub fn pick_none(mut self) -> Self {
            self.selections.push_back(None);
            self
        }

        pub fn answer(mut self, line: &str) -> Self {
            self.inputs.push_back(line.to_string());
            self
        }

        pub fn is_exhausted(&self) -> bool {
            self.selections.is_empty() && self.inputs.is_empty()
        }
    }

    impl Interaction for ScriptedInteraction {
        fn select(&mut self, _prompt: &str, candidates: &[String]) -> Result<Option<String>> {
            self.offered.push(candidates.to_vec());
            let choice = self.selections.pop_front().ok_or(Error::InputClosed)?;
            Ok(choice.filter(|c| candidates.contains(c)))
        }

        fn input(&mut self, _prompt: &str) -> Result<String> {
            self.inputs.pop_front().ok_or(Error::InputClosed)
        }

        fn edit(&mut self, path: &Path) -> Result<()> {
            self.edited.push(path.to_path_buf());
            if let Some(text) = &self.editor_text {
                let mut file = std::fs::OpenOptions::new().append(true).open(path)?;
                file.write_all(text.as_bytes())?;
            }
            Ok(())
        }
    }
}
