//! Dirty tracking for partial updates.
//!
//! A resource declares its trackable fields as an enum implementing
//! [`TrackedField`]. Its setters record the field in a [`DirtySet`], and
//! [`DirtyTracking`] exposes the queries. On save only the dirty fields are
//! sent.
//!
//! # How It Works
//!
//! - Every setter of a trackable field calls [`DirtySet::mark`].
//! - Getters never touch the set.
//! - Loading trusted server data writes fields directly and then calls
//!   [`DirtyTracking::mark_clean`], as does a successful save.
//!
//! # Example
//!
//! ```rust
//! use gumroad_api::rest::{DirtySet, DirtyTracking, TrackedField};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum NoteField { Title, Body }
//!
//! impl TrackedField for NoteField {
//!     const ALL: &'static [Self] = &[Self::Title, Self::Body];
//!
//!     fn name(self) -> &'static str {
//!         match self {
//!             Self::Title => "title",
//!             Self::Body => "body",
//!         }
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Note { title: String, dirty: DirtySet<NoteField> }
//!
//! impl Note {
//!     fn set_title(&mut self, title: &str) {
//!         self.title = title.to_string();
//!         self.dirty.mark(NoteField::Title);
//!     }
//! }
//!
//! impl DirtyTracking for Note {
//!     type Field = NoteField;
//!     fn dirty_set(&self) -> &DirtySet<NoteField> { &self.dirty }
//!     fn dirty_set_mut(&mut self) -> &mut DirtySet<NoteField> { &mut self.dirty }
//! }
//!
//! let mut note = Note::default();
//! assert!(!note.has_changes());
//!
//! note.set_title("Draft");
//! note.set_title("Final");
//! assert!(note.is_dirty(NoteField::Title));
//! assert!(note.is_dirty_by_name("title"));
//! assert_eq!(note.dirty_fields(), vec![NoteField::Title]);
//!
//! note.mark_clean();
//! assert!(!note.has_changes());
//! ```

use std::fmt::Debug;

/// A field of a resource that participates in dirty tracking.
///
/// Implemented by a fieldless enum listing the resource's trackable fields.
pub trait TrackedField: Copy + Eq + Debug + Send + Sync + 'static {
    /// Every trackable field, in declaration order.
    const ALL: &'static [Self];

    /// The field's wire name, used as the form parameter key on save.
    fn name(self) -> &'static str;

    /// Looks a field up by wire name.
    #[must_use]
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// The set of fields modified since the resource was last known to match
/// the server.
///
/// Fields keep the order in which they were first marked and appear at most
/// once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirtySet<F> {
    fields: Vec<F>,
}

impl<F> Default for DirtySet<F> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<F: TrackedField> DirtySet<F> {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Records `field` as dirty. Marking an already dirty field is a no-op.
    pub fn mark(&mut self, field: F) {
        if !self.fields.contains(&field) {
            self.fields.push(field);
        }
    }

    /// Returns `true` if `field` is dirty.
    #[must_use]
    pub fn contains(&self, field: F) -> bool {
        self.fields.contains(&field)
    }

    /// Returns `true` if no field is dirty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of dirty fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Iterates over dirty fields in the order they were first marked.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().copied()
    }

    /// Returns the wire names of the dirty fields.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(TrackedField::name).collect()
    }

    /// Empties the set.
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

/// Queries shared by every resource with trackable fields.
pub trait DirtyTracking {
    /// The resource's trackable field enum.
    type Field: TrackedField;

    /// Returns the resource's dirty set.
    fn dirty_set(&self) -> &DirtySet<Self::Field>;

    /// Returns the resource's dirty set mutably.
    fn dirty_set_mut(&mut self) -> &mut DirtySet<Self::Field>;

    /// Returns `true` if `field` was modified since the last load or save.
    fn is_dirty(&self, field: Self::Field) -> bool {
        self.dirty_set().contains(field)
    }

    /// Like [`is_dirty`](Self::is_dirty), by wire name. Unknown names are
    /// never dirty.
    fn is_dirty_by_name(&self, name: &str) -> bool {
        Self::Field::from_name(name).is_some_and(|field| self.is_dirty(field))
    }

    /// Returns `true` if any field is dirty.
    fn has_changes(&self) -> bool {
        !self.dirty_set().is_empty()
    }

    /// Returns the dirty fields in the order they were first marked.
    fn dirty_fields(&self) -> Vec<Self::Field> {
        self.dirty_set().iter().collect()
    }

    /// Forgets all modifications.
    fn mark_clean(&mut self) {
        self.dirty_set_mut().clear();
    }
}
