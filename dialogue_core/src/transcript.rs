//! Transcript writers - where the results of a run go.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::DialogueError;
use crate::knowledge_base::Fact;
use crate::session::{DialogueSession, SessionId};

/// Receives the visible events of each dialogue, in order.
pub trait TranscriptWriter {
    fn begin_dialogue(&mut self, session: &DialogueSession<'_>) -> Result<(), DialogueError>;

    fn exchange(&mut self, question: &str, answer: &str) -> Result<(), DialogueError>;

    fn end_dialogue(
        &mut self,
        farewell: &str,
        session: &DialogueSession<'_>,
    ) -> Result<(), DialogueError>;
}

/// The plain text transcript:
///
/// ```text
/// Dialogue #1:
/// Do I code in Python?
/// yes, you code in Python.
///
/// Bye!
///
/// ```
#[derive(Debug)]
pub struct TextTranscript<W: Write> {
    out: W,
}

impl<W: Write> TextTranscript<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranscriptWriter for TextTranscript<W> {
    fn begin_dialogue(&mut self, session: &DialogueSession<'_>) -> Result<(), DialogueError> {
        writeln!(self.out, "Dialogue #{}:", session.number())?;
        Ok(())
    }

    fn exchange(&mut self, question: &str, answer: &str) -> Result<(), DialogueError> {
        writeln!(self.out, "{question}")?;
        writeln!(self.out, "{answer}")?;
        writeln!(self.out)?;
        Ok(())
    }

    fn end_dialogue(
        &mut self,
        farewell: &str,
        _session: &DialogueSession<'_>,
    ) -> Result<(), DialogueError> {
        writeln!(self.out, "{farewell}")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    pub question: String,
    pub answer: String,
}

/// Everything a finished dialogue produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRecord {
    pub number: usize,
    pub session: SessionId,
    pub exchanges: Vec<Exchange>,
    pub farewell: String,
    pub contradicted: bool,
    pub facts: Vec<Fact>,
}

/// One JSON object per dialogue, one dialogue per line.
///
/// A dialogue is only written once it ends.
#[derive(Debug)]
pub struct JsonTranscript<W: Write> {
    out: W,
    exchanges: Vec<Exchange>,
}

impl<W: Write> JsonTranscript<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            exchanges: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TranscriptWriter for JsonTranscript<W> {
    fn begin_dialogue(&mut self, _session: &DialogueSession<'_>) -> Result<(), DialogueError> {
        self.exchanges.clear();
        Ok(())
    }

    fn exchange(&mut self, question: &str, answer: &str) -> Result<(), DialogueError> {
        self.exchanges.push(Exchange {
            question: question.to_string(),
            answer: answer.to_string(),
        });
        Ok(())
    }

    fn end_dialogue(
        &mut self,
        farewell: &str,
        session: &DialogueSession<'_>,
    ) -> Result<(), DialogueError> {
        let record = DialogueRecord {
            number: session.number(),
            session: session.id(),
            exchanges: std::mem::take(&mut self.exchanges),
            farewell: farewell.to_string(),
            contradicted: session.is_contradicted(),
            facts: session.facts().facts().to_vec(),
        };
        serde_json::to_writer(&mut self.out, &record)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
