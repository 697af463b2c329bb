//! Generic append-only table with identity assignment.

use indexmap::IndexMap;
use mahotsav_core::filter::MatchCase;
use mahotsav_core::types::DbId;

/// An entity kind that can live in an [`EntityTable`].
pub trait Record: Clone {
    /// Insert payload: every attribute except the identity.
    type Draft;

    /// Build the stored entity from the identity the table assigned.
    fn from_draft(id: DbId, draft: Self::Draft) -> Self;
}

/// A record with text fields the store looks rows up by.
pub trait Filterable: Record {
    /// Closed set of text fields that can be filtered on.
    type Field: Copy;

    /// Read a filterable text field.
    fn field(&self, field: Self::Field) -> &str;
}

/// Keyed collection for one entity kind.
///
/// Identities start at 1 and grow by one per insert. Rows are never updated
/// or removed, so iteration order is insertion order and ids are never
/// reused.
#[derive(Debug, Clone)]
pub struct EntityTable<T> {
    next_id: DbId,
    rows: IndexMap<DbId, T>,
}

impl<T> Default for EntityTable<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: IndexMap::new(),
        }
    }
}

impl<T: Record> EntityTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next identity, store the entity and return a copy of it.
    pub fn insert(&mut self, draft: T::Draft) -> T {
        let id = self.next_id;
        self.next_id += 1;

        let row = T::from_draft(id, draft);
        self.rows.insert(id, row.clone());
        row
    }

    /// Look up a single entity. `None` is an ordinary outcome.
    pub fn get_by_id(&self, id: DbId) -> Option<&T> {
        self.rows.get(&id)
    }

    /// All entities in insertion order.
    pub fn get_all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }

    /// Borrow every entity in insertion order without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Entities satisfying `predicate`, in insertion order.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Filterable> EntityTable<T> {
    /// Entities whose `field` equals `value` under the given case policy.
    pub fn get_by_field(&self, field: T::Field, value: &str, case: MatchCase) -> Vec<T> {
        self.filter(|row| case.matches(row.field(field), value))
    }

    /// First entity whose `field` equals `value` under the given case policy.
    pub fn find_by_field(&self, field: T::Field, value: &str, case: MatchCase) -> Option<&T> {
        self.rows
            .values()
            .find(|row| case.matches(row.field(field), value))
    }
}
