use uuid::Uuid;

/// Entities addressable by a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Entities carrying a human-readable name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Linear lookup by id. Snapshot collections are small enough that no index
/// is warranted.
pub fn find_by_id<T: Identifiable>(items: &[T], id: Uuid) -> Option<&T> {
    items.iter().find(|item| item.id() == id)
}
