use crate::{db::LevelIndex, structures::literal::Literal};

/// The assignments of a solve, in the order they were made.
///
/// `level_indices` records, for each open decision level, the index into
/// `assignments` at which that level began, so the current level is the
/// length of `level_indices`. Assignments below `q_head` have been
/// propagated.
#[derive(Debug, Default)]
pub struct Trail {
    assignments: Vec<Literal>,
    level_indices: Vec<usize>,
    q_head: usize,
}

impl Trail {
    pub fn new(variables: u32) -> Self {
        Trail {
            assignments: Vec::with_capacity(variables as usize),
            level_indices: Vec::default(),
            q_head: 0,
        }
    }

    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_indices.len() as LevelIndex
    }

    /// The count of assignments made.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// The assignments made, in order of assignment.
    pub fn assignments(&self) -> &[Literal] {
        &self.assignments
    }

    /// The indices at which each open decision level begins.
    pub fn level_boundaries(&self) -> &[usize] {
        &self.level_indices
    }

    /// Stores an assignment on the trail.
    pub fn push(&mut self, literal: Literal) {
        self.assignments.push(literal);
    }

    /// Opens a fresh decision level at the current height of the trail.
    pub fn open_level(&mut self) {
        self.level_indices.push(self.assignments.len());
    }

    /// The next assignment to propagate, if any, advancing the cursor.
    pub fn next_unpropagated(&mut self) -> Option<Literal> {
        let literal = self.assignments.get(self.q_head).copied();
        if literal.is_some() {
            self.q_head += 1;
        }
        literal
    }

    /// Removes every level above `target`, returning the removed assignments
    /// and rewinding the propagation cursor to the end of `target`.
    pub fn unwind_to(&mut self, target: LevelIndex) -> Vec<Literal> {
        debug_assert!(target < self.level());

        let mark = self.level_indices[target as usize];
        self.level_indices.truncate(target as usize);
        self.q_head = mark;
        self.assignments.split_off(mark)
    }
}
