//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use anyhow::{anyhow, Result};

use recall::candidates::CandidateSource;
use recall::context::EditorContext;
use recall::history::RingId;
use recall::host::{Document, Host};

/// In-memory document with a toggleable protection flag
#[derive(Debug, Default)]
pub struct FakeDocument {
    pub text: String,
    pub read_only: bool,
}

impl Document for FakeDocument {
    fn read_only(&self) -> bool {
        self.read_only
    }

    fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    fn insert_at_cursor(&mut self, text: &str) -> Result<()> {
        if self.read_only {
            return Err(anyhow!("position is protected"));
        }
        self.text.push_str(text);
        Ok(())
    }
}

/// Scripted host: answers completion prompts from a queue and records what
/// the extension asked of it
pub struct FakeHost {
    pub ctx: EditorContext,
    pub records: Vec<String>,
    pub prompt_history: Option<Vec<String>>,
    pub rings: HashMap<RingId, Vec<String>>,
    pub doc: FakeDocument,
    /// Text currently sitting in the active prompt's input area
    pub prompt_input: String,
    /// Queued answers for read_choice; empty queue answers None
    pub answers: VecDeque<Option<String>>,
    /// When set, read_choice fails like a broken facility would
    pub fail_prompt: bool,
    /// Every (label, offered items) pair read_choice saw
    pub prompts_seen: Vec<(String, Vec<String>)>,
    /// The source passed to the most recent read_choice call
    pub last_source: Option<CandidateSource>,
    /// How many times the prompt input was cleared
    pub times_cleared: usize,
}

impl FakeHost {
    pub fn new(ctx: EditorContext) -> Self {
        Self {
            ctx,
            records: Vec::new(),
            prompt_history: None,
            rings: HashMap::new(),
            doc: FakeDocument::default(),
            prompt_input: String::new(),
            answers: VecDeque::new(),
            fail_prompt: false,
            prompts_seen: Vec::new(),
            last_source: None,
            times_cleared: 0,
        }
    }

    /// Bind a ring in the fake environment (builder)
    pub fn with_ring(mut self, id: &str, entries: &[&str]) -> Self {
        self.rings
            .insert(RingId::from(id), entries.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Set the active prompt session's history list (builder)
    pub fn with_prompt_history(mut self, entries: &[&str]) -> Self {
        self.prompt_history = Some(entries.iter().map(|s| s.to_string()).collect());
        self
    }

    /// Set the complex-command records (builder)
    pub fn with_records(mut self, entries: &[&str]) -> Self {
        self.records = entries.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Queue the next completion answer (builder)
    pub fn answering(mut self, answer: Option<&str>) -> Self {
        self.answers.push_back(answer.map(String::from));
        self
    }
}

impl Host for FakeHost {
    fn context(&self) -> EditorContext {
        self.ctx
    }

    fn command_records(&self) -> Vec<String> {
        self.records.clone()
    }

    fn active_prompt_history(&self) -> Option<Vec<String>> {
        self.prompt_history.clone()
    }

    fn ring(&self, id: &RingId) -> Option<Vec<String>> {
        self.rings.get(id).cloned()
    }

    fn read_choice(&mut self, label: &str, source: &CandidateSource) -> Result<Option<String>> {
        if self.fail_prompt {
            return Err(anyhow!("completion facility failed"));
        }
        self.prompts_seen
            .push((label.to_string(), source.items().to_vec()));
        self.last_source = Some(source.clone());
        Ok(self.answers.pop_front().flatten())
    }

    fn clear_prompt_input(&mut self) -> Result<()> {
        self.prompt_input.clear();
        self.times_cleared += 1;
        Ok(())
    }

    fn document(&mut self) -> &mut dyn Document {
        &mut self.doc
    }
}
