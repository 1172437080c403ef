//! The line-oriented driver.
//!
//! Input is a count line followed by that many dialogues, each closed by a
//! line ending in `!`:
//!
//! ```text
//! 1
//! I code in Python.
//! Do I code in Python?
//! Bye!
//! ```

use std::io::BufRead;
use tracing::info;

use crate::config::Config;
use crate::error::DialogueError;
use crate::session::{DialogueSession, Turn};
use crate::transcript::TranscriptWriter;

/// Run every dialogue in the input. Returns how many were completed.
///
/// The first error stops the run; whatever the transcript already wrote is
/// left in place.
pub fn run_dialogues<R, T>(
    config: &Config,
    input: R,
    transcript: &mut T,
) -> Result<usize, DialogueError>
where
    R: BufRead,
    T: TranscriptWriter + ?Sized,
{
    let mut lines = input.lines();

    let count_line = lines.next().ok_or(DialogueError::MissingDialogueCount)??;
    let count = parse_count(&count_line)?;
    info!(dialogues = count, "starting run");

    for number in 1..=count {
        let mut session = DialogueSession::new(number, config);
        info!(session = %session.id(), number, "dialogue started");
        transcript.begin_dialogue(&session)?;

        loop {
            let line = match lines.next() {
                Some(line) => line?,
                None => return Err(DialogueError::UnterminatedDialogue { number }),
            };
            let line = line.strip_suffix('\r').unwrap_or(&line);

            match session.handle_line(line)? {
                Turn::Recorded { .. } => {}
                Turn::Answered { question, answer } => transcript.exchange(&question, &answer)?,
                Turn::Ended { farewell } => {
                    transcript.end_dialogue(&farewell, &session)?;
                    break;
                }
            }
        }

        info!(
            session = %session.id(),
            number,
            facts = session.facts().len(),
            contradicted = session.is_contradicted(),
            "dialogue finished"
        );
    }

    Ok(count)
}

fn parse_count(line: &str) -> Result<usize, DialogueError> {
    line.trim()
        .parse()
        .map_err(|_| DialogueError::InvalidDialogueCount {
            line: line.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transcript::TextTranscript;
    use pretty_assertions::assert_eq;

    fn run(input: &str) -> (Result<usize, DialogueError>, String) {
        let config = Config::default();
        let mut transcript = TextTranscript::new(Vec::new());
        let result = run_dialogues(&config, input.as_bytes(), &mut transcript);
        let text = String::from_utf8(transcript.into_inner()).unwrap();
        (result, text)
    }

    fn transcript(input: &str) -> String {
        let (result, text) = run(input);
        result.unwrap();
        text
    }

    #[test]
    fn test_true_false_dialogue() {
        let output = transcript(
            "1\n\
             I code in Python.\n\
             Do I code in Python?\n\
             Bye!\n",
        );
        assert_eq!(
            output,
            "Dialogue #1:\n\
             Do I code in Python?\n\
             yes, you code in Python.\n\
             \n\
             Bye!\n\
             \n"
        );
    }

    #[test]
    fn test_contradiction_dialogue() {
        let output = transcript(
            "1\n\
             I like cats.\n\
             I don't like cats.\n\
             Do I like cats?\n\
             Who likes cats?\n\
             That's all!\n",
        );
        assert_eq!(
            output,
            "Dialogue #1:\n\
             Do I like cats?\n\
             I am abroad.\n\
             \n\
             Who likes cats?\n\
             I am abroad.\n\
             \n\
             That's all!\n\
             \n"
        );
    }

    #[test]
    fn test_several_dialogues_are_independent() {
        let output = transcript(
            "3\n\
             Alice runs the school.\n\
             Bob runs the store.\n\
             Who runs the school?\n\
             Thanks!\n\
             I like cats.\n\
             I like dogs.\n\
             What do I like?\n\
             Who runs the school?\n\
             Bye!\n\
             Do I code in Python?\n\
             Goodbye!\n",
        );
        assert_eq!(
            output,
            "Dialogue #1:\n\
             Who runs the school?\n\
             Alice runs the school.\n\
             \n\
             Thanks!\n\
             \n\
             Dialogue #2:\n\
             What do I like?\n\
             you like cats, and like dogs.\n\
             \n\
             Who runs the school?\n\
             I don't know.\n\
             \n\
             Bye!\n\
             \n\
             Dialogue #3:\n\
             Do I code in Python?\n\
             maybe.\n\
             \n\
             Goodbye!\n\
             \n"
        );
    }

    #[test]
    fn test_crlf_lines() {
        let output = transcript("1\r\nI run.\r\nDo I run?\r\nBye!\r\n");
        assert_eq!(output, "Dialogue #1:\nDo I run?\nyes, you run.\n\nBye!\n\n");
    }

    #[test]
    fn test_zero_dialogues() {
        let (result, output) = run("0\n");
        assert_eq!(result.unwrap(), 0);
        assert_eq!(output, "");
    }

    #[test]
    fn test_missing_count() {
        let (result, _) = run("");
        assert!(matches!(result, Err(DialogueError::MissingDialogueCount)));

        let (result, _) = run("two\nBye!\n");
        assert!(matches!(
            result,
            Err(DialogueError::InvalidDialogueCount { .. })
        ));
    }

    #[test]
    fn test_unterminated_dialogue() {
        let (result, output) = run("2\nBye!\nI like cats.\n");
        assert!(matches!(
            result,
            Err(DialogueError::UnterminatedDialogue { number: 2 })
        ));
        assert_eq!(output, "Dialogue #1:\nBye!\n\nDialogue #2:\n");
    }

    #[test]
    fn test_parse_error_stops_the_run() {
        let (result, output) = run("1\nDo I like cats?\nI like cats\nBye!\n");
        assert!(matches!(result, Err(DialogueError::Grammar(_))));
        assert_eq!(output, "Dialogue #1:\nDo I like cats?\nmaybe.\n\n");
    }
}
