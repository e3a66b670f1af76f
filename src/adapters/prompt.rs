use crate::domain::ports::ConfirmPrompt;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

/// Asks on a terminal. Anything other than an explicit yes counts as "no".
pub struct TerminalPrompt<R, W> {
    input: Mutex<R>,
    output: Mutex<W>,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: Mutex::new(input),
            output: Mutex::new(output),
        }
    }

    fn ask(&self, message: &str) -> io::Result<bool> {
        {
            let mut output = self.output.lock().unwrap_or_else(|e| e.into_inner());
            write!(output, "{} [o/N] ", message)?;
            output.flush()?;
        }

        let mut answer = String::new();
        self.input
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .read_line(&mut answer)?;

        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "o" | "oui" | "y" | "yes"
        ))
    }
}

impl<R: BufRead, W: Write> ConfirmPrompt for TerminalPrompt<R, W> {
    fn confirm(&self, message: &str) -> bool {
        match self.ask(message) {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!("Could not read confirmation answer: {}", e);
                false
            }
        }
    }
}

/// Answers every prompt the same way and remembers what was asked.
#[derive(Debug)]
pub struct ScriptedPrompt {
    answer: bool,
    shown: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            shown: Mutex::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.shown.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.shown
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
        self.answer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_terminal_prompt_accepts_french_and_english_yes() {
        for reply in ["o\n", "OUI\n", "y\n", " yes \n"] {
            let prompt = TerminalPrompt::new(Cursor::new(reply.as_bytes()), Vec::new());
            assert!(prompt.confirm("Supprimer ?"), "reply {:?}", reply);
        }
    }

    #[test]
    fn test_terminal_prompt_defaults_to_no() {
        for reply in ["n\n", "\n", "peut-être\n", ""] {
            let prompt = TerminalPrompt::new(Cursor::new(reply.as_bytes()), Vec::new());
            assert!(!prompt.confirm("Supprimer ?"), "reply {:?}", reply);
        }
    }

    #[test]
    fn test_terminal_prompt_writes_message() {
        let prompt = TerminalPrompt::new(Cursor::new(&b"o\n"[..]), Vec::new());
        prompt.confirm("Supprimer le patient ?");
        let written = prompt.output.into_inner().unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), "Supprimer le patient ? [o/N] ");
    }

    #[test]
    fn test_scripted_prompt_records_messages() {
        let prompt = ScriptedPrompt::answering(true);
        assert!(prompt.confirm("un"));
        assert!(prompt.confirm("deux"));
        assert_eq!(prompt.messages(), vec!["un", "deux"]);
    }
}
