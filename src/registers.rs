// src/registers.rs - Bounded yank/put register

use crate::row::Row;

/// Default number of rows the register holds
pub const DEFAULT_CAPACITY: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegisterError {
    #[error("register is full ({0} rows)")]
    Full(usize),
}

/// LIFO stack of yanked rows with a fixed capacity
#[derive(Debug, Clone)]
pub struct Register {
    stack: Vec<Row>,
    capacity: usize,
}

impl Default for Register {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Register {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            stack: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.stack.len() >= self.capacity
    }

    /// Push a copy of a row. A full register rejects the push and is left unchanged.
    pub fn push(&mut self, row: Row) -> Result<(), RegisterError> {
        if self.is_full() {
            return Err(RegisterError::Full(self.capacity));
        }
        self.stack.push(row);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Row> {
        self.stack.pop()
    }
}
