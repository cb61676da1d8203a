/// Replication group a dirty field is scheduled under
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NetVarGroup {
    /// Replicated to every observer of the owning object
    Net,
}
