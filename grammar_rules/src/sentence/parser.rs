//! The grammar parser.
//!
//! ```text
//! statement = [NEG] SUBJECT [NEG] VERB OBJECT* '.'
//! question  = ('do' | 'does') SUBJECT VERB OBJECT* '?'
//!           | 'who' VERB OBJECT* '?'
//!           | 'what' AUX SUBJECT WORD* '?'
//! end       = ANY* '!'
//! ```
//!
//! A leading negation is the subject itself being a negating word
//! ("nobody likes cats"). A negating word right after the subject is
//! consumed and only sets the statement's polarity.

use crate::{
    tokenize, DialogueEnd, GrammarError, Lexicon, Object, Predicate, Question, QuestionKind,
    QuestionOpener, Sentence, Statement, Subject, Word, WordRole,
};

/// Parses raw lines against a lexicon.
#[derive(Debug, Clone, Copy)]
pub struct SentenceParser<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> SentenceParser<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// Parse one line of dialogue.
    pub fn parse(&self, line: &str) -> Result<Sentence, GrammarError> {
        if line.ends_with('?') {
            self.parse_question(line).map(Sentence::Question)
        } else if line.ends_with('.') {
            self.parse_statement(line).map(Sentence::Statement)
        } else if line.ends_with('!') {
            Ok(Sentence::End(DialogueEnd {
                raw: line.to_string(),
            }))
        } else {
            Err(GrammarError::MissingTerminator {
                line: line.to_string(),
            })
        }
    }

    fn parse_statement(&self, line: &str) -> Result<Statement, GrammarError> {
        let mut words = WordStream::new(line);

        let subject = Subject::parse(&words.next_word(WordRole::Subject)?, self.lexicon);
        let is_negative = subject.is_negative
            || words
                .next_if(|word| self.lexicon.is_negating(&word.text))
                .is_some();
        let predicate = Predicate::parse(&words.next_word(WordRole::Predicate)?);
        let object = Object::from_words(words.rest());

        Ok(Statement {
            raw: line.to_string(),
            is_all_encompassing: subject.is_all_encompassing,
            subject,
            predicate,
            object,
            is_negative,
        })
    }

    fn parse_question(&self, line: &str) -> Result<Question, GrammarError> {
        let mut words = WordStream::new(line);

        let opener = words.next_word(WordRole::Opener)?;
        let kind = match self.lexicon.question_opener(&opener.text) {
            Some(QuestionOpener::TrueFalse) => {
                let subject = Subject::parse(&words.next_word(WordRole::Subject)?, self.lexicon);
                let predicate = Predicate::parse(&words.next_word(WordRole::Predicate)?);
                QuestionKind::TrueFalse {
                    subject,
                    predicate,
                    object: Object::from_words(words.rest()),
                }
            }
            Some(QuestionOpener::Who) => {
                let predicate = Predicate::parse(&words.next_word(WordRole::Predicate)?);
                QuestionKind::Who {
                    predicate,
                    object: Object::from_words(words.rest()),
                }
            }
            Some(QuestionOpener::What) => {
                words.next_word(WordRole::Auxiliary)?;
                let subject = Subject::parse(&words.next_word(WordRole::Subject)?, self.lexicon);
                QuestionKind::What { subject }
            }
            None => {
                return Err(GrammarError::UnknownQuestionOpener {
                    opener: opener.text,
                    line: line.to_string(),
                })
            }
        };

        Ok(Question {
            raw: line.to_string(),
            kind,
        })
    }
}

/// Left-to-right cursor over the words of one line.
struct WordStream<'l> {
    line: &'l str,
    words: Vec<Word>,
    pos: usize,
}

impl<'l> WordStream<'l> {
    fn new(line: &'l str) -> Self {
        Self {
            line,
            words: tokenize(line),
            pos: 0,
        }
    }

    fn next_word(&mut self, role: WordRole) -> Result<Word, GrammarError> {
        match self.words.get(self.pos) {
            Some(word) => {
                self.pos += 1;
                Ok(word.clone())
            }
            None => Err(GrammarError::MissingWord {
                role,
                line: self.line.to_string(),
            }),
        }
    }

    fn next_if(&mut self, predicate: impl FnOnce(&Word) -> bool) -> Option<&Word> {
        let word = self.words.get(self.pos).filter(|word| predicate(*word))?;
        self.pos += 1;
        Some(word)
    }

    /// Consume everything that is left.
    fn rest(&mut self) -> &[Word] {
        let rest = &self.words[self.pos.min(self.words.len())..];
        self.pos = self.words.len();
        rest
    }
}
