//! Working clause set with unit-preference queues.

use std::collections::{HashSet, VecDeque};

use super::config::DedupMode;
use crate::syntax::Clause;

/// Every clause known to one proof attempt, plus the queues of clauses
/// still waiting to be used as a pivot.
///
/// Clauses are stored once and referred to by index. Queues hold indices.
#[derive(Debug, Clone)]
pub struct ClauseSet {
    clauses: Vec<Clause>,
    keys: HashSet<String>,
    units: VecDeque<usize>,
    non_units: VecDeque<usize>,
    dedup: DedupMode,
}

impl ClauseSet {
    pub fn new(dedup: DedupMode) -> Self {
        ClauseSet {
            clauses: Vec::new(),
            keys: HashSet::new(),
            units: VecDeque::new(),
            non_units: VecDeque::new(),
            dedup,
        }
    }

    /// Add an input clause at the back of its queue.
    ///
    /// Returns `None` when the clause is already known.
    pub fn insert_initial(&mut self, clause: Clause) -> Option<usize> {
        let idx = self.record(clause)?;
        if self.clauses[idx].is_unit() {
            self.units.push_back(idx);
        } else {
            self.non_units.push_back(idx);
        }
        Some(idx)
    }

    /// Add a derived clause. Units jump to the front of the unit queue.
    ///
    /// Returns `None` when the clause is already known.
    pub fn insert_derived(&mut self, clause: Clause) -> Option<usize> {
        let idx = self.record(clause)?;
        if self.clauses[idx].is_unit() {
            self.units.push_front(idx);
        } else {
            self.non_units.push_back(idx);
        }
        Some(idx)
    }

    fn record(&mut self, clause: Clause) -> Option<usize> {
        if !self.keys.insert(self.dedup.key(&clause)) {
            return None;
        }
        self.clauses.push(clause);
        Some(self.clauses.len() - 1)
    }

    /// Dequeue the next pivot: units first, then non-units, both FIFO.
    pub fn next_pivot(&mut self) -> Option<usize> {
        self.units.pop_front().or_else(|| self.non_units.pop_front())
    }

    pub fn has_pending(&self) -> bool {
        !self.units.is_empty() || !self.non_units.is_empty()
    }

    /// Indices of the clauses a pivot is compared against, as of now.
    ///
    /// A unit pivot meets every known clause. A longer pivot meets the known
    /// unit clauses, or every clause when no unit is known.
    pub fn partners_for(&self, pivot: usize) -> Vec<usize> {
        let all = 0..self.clauses.len();
        if self.clauses[pivot].is_unit() {
            return all.collect();
        }
        let units: Vec<usize> = all.clone().filter(|&i| self.clauses[i].is_unit()).collect();
        if units.is_empty() {
            all.collect()
        } else {
            units
        }
    }

    pub fn get(&self, idx: usize) -> &Clause {
        &self.clauses[idx]
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }
}
