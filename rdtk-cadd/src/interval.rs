//! Genomic intervals and the chunks they are split into
//!
//! Both are half-open: `[start, end)`.

use crate::error::{CaddError, Result};
use std::fmt;

/// A validated genomic interval
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    chromosome: String,
    start: u64,
    end: u64,
}

impl Interval {
    /// Create an interval from typed bounds
    ///
    /// Rejects an empty chromosome name and `start >= end`.
    pub fn new(chromosome: impl Into<String>, start: u64, end: u64) -> Result<Self> {
        let chromosome = chromosome.into();
        if chromosome.trim().is_empty() {
            return Err(CaddError::InvalidInterval(
                "chromosome must not be empty".to_string(),
            ));
        }
        if start >= end {
            return Err(CaddError::InvalidInterval(format!(
                "start ({}) must be less than end ({})",
                start, end
            )));
        }
        Ok(Self {
            chromosome,
            start,
            end,
        })
    }

    /// Parse an interval from free-text fields
    ///
    /// Surrounding whitespace is ignored. All three fields must be present and
    /// the positions must be non-negative integers.
    pub fn parse(chromosome: &str, start: &str, end: &str) -> Result<Self> {
        let chromosome = chromosome.trim();
        let start = start.trim();
        let end = end.trim();

        if chromosome.is_empty() || start.is_empty() || end.is_empty() {
            return Err(CaddError::InvalidInterval(
                "please fill in chromosome, start and end".to_string(),
            ));
        }

        let start = parse_position("start", start)?;
        let end = parse_position("end", end)?;

        Self::new(chromosome, start, end)
    }

    pub fn chromosome(&self) -> &str {
        &self.chromosome
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    /// Number of positions covered
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    /// Always false for a constructed interval
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.start, self.end)
    }
}

fn parse_position(field: &str, value: &str) -> Result<u64> {
    value.parse::<u64>().map_err(|_| {
        CaddError::InvalidInterval(format!(
            "{} position must be a non-negative integer, got '{}'",
            field, value
        ))
    })
}

/// One contiguous sub-range of an [`Interval`], fetched by a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// Position of this chunk within its partition (0-based)
    pub index: usize,
    pub chromosome: String,
    pub chunk_start: u64,
    pub chunk_end: u64,
}

impl Chunk {
    pub fn len(&self) -> u64 {
        self.chunk_end - self.chunk_start
    }

    pub fn is_empty(&self) -> bool {
        self.chunk_start >= self.chunk_end
    }
}

/// Region address used in the range endpoint path
impl fmt::Display for Chunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}-{}", self.chromosome, self.chunk_start, self.chunk_end)
    }
}
