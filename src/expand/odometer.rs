//! Lazy Cartesian product over per-node alternative sets
//!
//! The product is enumerated as a mixed-radix counter whose last digit
//! advances fastest. Index `i` of the enumeration can also be decoded
//! directly, which lets workers build paths independently and still
//! reassemble them in order.

use std::iter::FusedIterator;

use super::ExpandError;
use super::path::{Path, Segment};
use crate::parser::{Document, Name};

/// One factor of the product: a node's alternatives and its tag
#[derive(Debug, Clone, Copy)]
struct Factor<'d> {
    alternatives: &'d [Name],
    tag: Option<&'d Name>,
}

/// Restartable lazy sequence of every path a document denotes
#[derive(Debug, Clone)]
pub struct Expansion<'d> {
    factors: Vec<Factor<'d>>,
    digits: Vec<usize>,
    total: usize,
    emitted: usize,
}

impl<'d> Expansion<'d> {
    /// Fails only if the number of paths does not fit in `usize`.
    pub fn new(document: &'d Document) -> Result<Self, ExpandError> {
        let factors: Vec<Factor<'d>> = document
            .iter()
            .map(|node| Factor {
                alternatives: node.alternatives(),
                tag: node.tag(),
            })
            .collect();

        let total = factors.iter().try_fold(1usize, |acc, factor| {
            acc.checked_mul(factor.alternatives.len())
                .ok_or(ExpandError::ProductOverflow)
        })?;

        Ok(Self {
            digits: vec![0; factors.len()],
            factors,
            total,
            emitted: 0,
        })
    }

    /// Number of paths in the full product
    pub fn total(&self) -> usize {
        self.total
    }

    /// Rewind to the first path
    pub fn restart(&mut self) {
        self.digits.iter_mut().for_each(|d| *d = 0);
        self.emitted = 0;
    }

    /// Decode the path at odometer position `index`
    pub fn get(&self, index: usize) -> Option<Path> {
        (index < self.total).then(|| self.path_at(index))
    }

    pub(crate) fn path_at(&self, mut index: usize) -> Path {
        let mut digits = vec![0; self.factors.len()];
        for (digit, factor) in digits.iter_mut().zip(&self.factors).rev() {
            let radix = factor.alternatives.len();
            *digit = index % radix;
            index /= radix;
        }
        self.build(&digits)
    }

    fn build(&self, digits: &[usize]) -> Path {
        let segments = self
            .factors
            .iter()
            .zip(digits)
            .map(|(factor, &digit)| Segment::new(factor.alternatives[digit].clone(), factor.tag.cloned()))
            .collect();
        Path::new(segments)
    }

    fn advance(&mut self) {
        for (digit, factor) in self.digits.iter_mut().zip(&self.factors).rev() {
            *digit += 1;
            if *digit < factor.alternatives.len() {
                return;
            }
            *digit = 0;
        }
    }
}

impl Iterator for Expansion<'_> {
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        if self.emitted >= self.total {
            return None;
        }
        let path = self.build(&self.digits);
        self.advance();
        self.emitted += 1;
        Some(path)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.emitted;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Expansion<'_> {}

impl FusedIterator for Expansion<'_> {}
