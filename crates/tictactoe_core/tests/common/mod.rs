//! Scripted collaborators for driving sessions in tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use tictactoe_core::{ConsoleError, Coord, Input, Output, Symbol};

/// Answers requests from per-kind queues; an empty queue acts like a closed stream.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    integers: VecDeque<i64>,
    symbols: VecDeque<Symbol>,
    answers: VecDeque<bool>,
    names: VecDeque<String>,
    coords: VecDeque<(usize, usize)>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn menu(mut self, choice: i64) -> Self {
        self.integers.push_back(choice);
        self
    }

    pub fn symbol(mut self, symbol: Symbol) -> Self {
        self.symbols.push_back(symbol);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.names.push_back(name.to_string());
        self
    }

    pub fn moves(mut self, coords: &[(usize, usize)]) -> Self {
        self.coords.extend(coords.iter().copied());
        self
    }

    pub fn replay(mut self, again: bool) -> Self {
        self.answers.push_back(again);
        self
    }

    pub fn remaining_moves(&self) -> usize {
        self.coords.len()
    }
}

fn exhausted(what: &str) -> ConsoleError {
    ConsoleError::new(format!("script has no more {what}"))
}

impl Input for ScriptedInput {
    fn request_integer(&mut self, min: i64, max: i64) -> Result<i64, ConsoleError> {
        let value = self.integers.pop_front().ok_or_else(|| exhausted("integers"))?;
        assert!((min..=max).contains(&value), "scripted {value} outside {min}..={max}");
        Ok(value)
    }

    fn request_symbol_choice(&mut self) -> Result<Symbol, ConsoleError> {
        self.symbols.pop_front().ok_or_else(|| exhausted("symbols"))
    }

    fn request_yes_no(&mut self) -> Result<bool, ConsoleError> {
        self.answers.pop_front().ok_or_else(|| exhausted("yes/no answers"))
    }

    fn request_name(&mut self, _label: &str) -> Result<String, ConsoleError> {
        self.names.pop_front().ok_or_else(|| exhausted("names"))
    }

    fn request_coordinate(&mut self) -> Result<Coord, ConsoleError> {
        let (row, col) = self.coords.pop_front().ok_or_else(|| exhausted("coordinates"))?;
        Ok(Coord::new(row, col))
    }
}

/// Keeps every displayed block.
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub blocks: Vec<String>,
}

impl RecordingOutput {
    pub fn contains(&self, text: &str) -> bool {
        self.blocks.iter().any(|b| b.contains(text))
    }

    pub fn count(&self, text: &str) -> usize {
        self.blocks.iter().filter(|b| b.contains(text)).count()
    }

    pub fn last(&self) -> &str {
        self.blocks.last().map(String::as_str).unwrap_or_default()
    }
}

impl Output for RecordingOutput {
    fn display(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.blocks.push(text.to_string());
        Ok(())
    }
}
