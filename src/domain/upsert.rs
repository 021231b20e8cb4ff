//! Create-or-update resolution for caller supplied identifiers

/// What a save request asks for, decided before any storage access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert<Id> {
    /// No identifier supplied: insert a new row.
    Create,
    /// Identifier supplied: load the row and mutate it.
    UpdateExisting(Id),
}

impl<Id> From<Option<Id>> for Upsert<Id> {
    fn from(id: Option<Id>) -> Self {
        match id {
            Some(id) => Self::UpdateExisting(id),
            None => Self::Create,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_id_means_create() {
        assert_eq!(Upsert::<i32>::from(None), Upsert::Create);
    }

    #[test]
    fn present_id_means_update() {
        assert_eq!(Upsert::from(Some(7)), Upsert::UpdateExisting(7));
    }
}
