//! Choice state machine driving every decision point.
//!
//! A [`Dialogue`] renders a prompt plus numbered choices through the
//! [`Console`] boundary and loops until it reads a valid selection. Bad
//! input never raises; it re-prompts. The session layer composes dialogues
//! dynamically, e.g. appending one "Go through the ..." choice per door.

use std::collections::VecDeque;

/// Line-oriented interaction boundary.
///
/// Each prompt is rendered as text and a single whitespace-delimited token
/// is read back. This is the only collaborator the core depends on for
/// input; the client implements it over stdin/stdout and tests use
/// [`ScriptedConsole`].
pub trait Console {
    fn print(&mut self, text: &str);

    fn read_token(&mut self) -> String;
}

/// A prompt with an ordered list of selectable choices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dialogue {
    prompt: String,
    choices: Vec<String>,
}

impl Dialogue {
    pub fn new<S: Into<String>>(prompt: impl Into<String>, choices: impl IntoIterator<Item = S>) -> Self {
        Self {
            prompt: prompt.into(),
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a choice; only meaningful before [`Dialogue::activate`].
    pub fn push_choice(&mut self, label: impl Into<String>) {
        self.choices.push(label.into());
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Render the prompt and block until a valid selection is read.
    ///
    /// Returns a value in `0..=len()`: choices are 1-based, and `0` is the
    /// reserved sentinel the session interprets as "open the meta menu".
    /// Out-of-range and non-numeric tokens re-prompt; given a well-behaved
    /// input source this always converges.
    pub fn activate(&self, console: &mut dyn Console) -> usize {
        loop {
            console.print(&self.render());
            match console.read_token().trim().parse::<usize>() {
                Ok(selection) if selection <= self.choices.len() => return selection,
                _ => console.print("Invalid choice."),
            }
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if !self.prompt.is_empty() {
            out.push_str(&self.prompt);
            out.push('\n');
        }
        for (i, choice) in self.choices.iter().enumerate() {
            out.push_str(&format!("{}: {}\n", i + 1, choice));
        }
        out
    }
}

/// Scripted console for tests: canned input tokens, captured output.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub transcript: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<S: Into<String>>(inputs: impl IntoIterator<Item = S>) -> Self {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// True if any printed line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn print(&mut self, text: &str) {
        self.transcript.push(text.to_owned());
    }

    fn read_token(&mut self) -> String {
        match self.inputs.pop_front() {
            Some(token) => token,
            None => panic!("scripted console ran out of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_selection_is_returned() {
        let dialogue = Dialogue::new("Choose your class", ["Fighter", "Rogue"]);
        let mut console = ScriptedConsole::new(["2"]);
        assert_eq!(dialogue.activate(&mut console), 2);
        assert!(console.printed("1: Fighter"));
        assert!(console.printed("2: Rogue"));
    }

    #[test]
    fn garbage_and_out_of_range_reprompt_until_valid() {
        let dialogue = Dialogue::new("Menu", ["Only option"]);
        let mut console = ScriptedConsole::new(["x", "7", "-1", "1"]);
        assert_eq!(dialogue.activate(&mut console), 1);
        assert!(console.printed("Invalid choice."));
    }

    #[test]
    fn zero_is_the_meta_sentinel() {
        let dialogue = Dialogue::new("Room", ["Look around"]);
        let mut console = ScriptedConsole::new(["0"]);
        assert_eq!(dialogue.activate(&mut console), 0);
    }

    #[test]
    fn appended_choices_extend_the_valid_range() {
        let mut dialogue = Dialogue::new("Room", ["Listen"]);
        dialogue.push_choice("Go through the oak door");
        dialogue.push_choice("Search");
        assert_eq!(dialogue.len(), 3);

        let mut console = ScriptedConsole::new(["3"]);
        assert_eq!(dialogue.activate(&mut console), 3);
    }
}
