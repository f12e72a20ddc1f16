use super::AggregateId;

/// Aggregate root
///
/// Instance accessors plus the static names used for tables and UI titles.
pub trait AggregateRoot {
    /// Id type of the aggregate
    type Id: AggregateId;

    /// Record id
    fn id(&self) -> Self::Id;

    /// Human readable name of the record
    fn display_name(&self) -> &str;

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "publisher")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Editorial")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Editoriales")
    fn list_name() -> &'static str;

    /// Full system name (e.g. "a001_publisher")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
