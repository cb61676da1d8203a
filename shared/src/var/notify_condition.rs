/// Decides when a `NetVar` raises its change listeners and marks itself dirty
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum NotifyCondition {
    /// Never notify, assignments are stored silently
    Never,
    /// Notify when the assigned value differs from the previous one
    #[default]
    OnChange,
    /// Notify on every assignment
    Always,
}
