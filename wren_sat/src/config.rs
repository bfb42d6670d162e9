/*!
Configuration of a context.
*/

/// The configuration of a solve.
///
/// The defaults leave the search unbounded and deterministic; two solves of
/// the same formula under the same configuration make the same decisions,
/// learn the same clauses, and report the same statistics.
#[derive(Clone, Debug)]
pub struct Config {
    /// Abandon the search with an unknown report once this many conflicts
    /// have been seen.
    pub conflict_limit: Option<u64>,

    /// Apply self-subsumption minimization to learnt clauses.
    pub minimization: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            conflict_limit: None,
            minimization: true,
        }
    }
}
