//! Yes/no decisions for overwriting already-installed artifacts

use inquire::Confirm;
use tracing::warn;

use crate::error::OwnuiError;

/// Answers an overwrite question. `false` means keep the existing files.
pub trait Confirmer {
    fn confirm(&mut self, message: &str) -> bool;
}

/// Asks on the terminal; anything other than an explicit "yes" is a no
#[derive(Debug, Default)]
pub struct PromptConfirmer;

impl Confirmer for PromptConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        if !console::user_attended() {
            warn!(question = message, "no terminal attached, keeping existing files");
            return false;
        }

        match Confirm::new(message)
            .with_default(false)
            .with_help_message("Press Enter to keep your files, or 'y' to overwrite")
            .prompt()
        {
            Ok(answer) => answer,
            Err(e) => {
                let err = OwnuiError::from(e);
                warn!(error = %err, "keeping existing files");
                false
            }
        }
    }
}

/// Gives the same answer every time and remembers what it was asked
#[derive(Debug, Default)]
pub struct FixedConfirmer {
    answer: bool,
    questions: Vec<String>,
}

impl FixedConfirmer {
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            questions: Vec::new(),
        }
    }

    #[cfg(test)]
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Confirmer for FixedConfirmer {
    fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answer
    }
}
