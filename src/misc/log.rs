/*!
Items related to [logging](log).

Log calls are made throughout the library, scoped by target so output can be narrowed to one part of the engine --- e.g. `RUST_LOG=resolution …` with env_logger.
No log implementation is provided by the library itself.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [percept encoding](crate::knowledge::KnowledgeBase::ingest).
    pub const ENCODING: &str = "encoding";

    /// Logs related to [the saturation pass](crate::knowledge::KnowledgeBase::resolve).
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the clause sequence and classification grid.
    pub const KNOWLEDGE: &str = "knowledge_base";

    /// Logs related to [exploration](crate::procedures::explore).
    pub const EXPLORE: &str = "explore";

    /// Logs related to [world generation](crate::world).
    pub const WORLD: &str = "world";
}
