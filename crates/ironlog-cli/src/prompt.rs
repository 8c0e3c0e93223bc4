//! Yes/no confirmation on the terminal.

use rustyline::DefaultEditor;

/// Asks `question` and returns whether the answer was yes.
///
/// Anything other than an explicit yes, including Ctrl-C, Ctrl-D or a
/// terminal that cannot be opened, counts as no.
pub fn confirm(question: &str) -> bool {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            tracing::warn!("Cannot open the terminal for confirmation: {}", e);
            return false;
        }
    };
    match editor.readline(&format!("{} [y/N] ", question)) {
        Ok(answer) => is_yes(&answer),
        Err(_) => false,
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_yes() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES \n"));
        assert!(!is_yes(""));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }
}
