/// Counts for various things which count.
#[derive(Clone, Debug, Default)]
pub struct Counters {
    /// A count of every clause ingested --- read or learnt, stored or not.
    pub added: u64,

    /// A count of every conflict seen during a solve.
    ///
    /// Doubles as the stamp written to atoms during conflict analysis.
    pub conflicts: u64,

    /// A count of all decisions made.
    pub decisions: u64,

    /// A count of all literals propagated.
    pub propagations: u64,

    /// A count of backjumps which skipped at least one level.
    pub backjumps: u64,
}
