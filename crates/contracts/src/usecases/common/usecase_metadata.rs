/// Identification of a use case
pub trait UseCaseMetadata {
    /// Index (e.g. "u401")
    fn usecase_index() -> &'static str;

    /// Technical name (e.g. "pending_order")
    fn usecase_name() -> &'static str;

    /// Title shown in the console
    fn display_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u401_pending_order"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
