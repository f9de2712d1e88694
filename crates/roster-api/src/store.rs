//! In-memory student registry.
//!
//! [`StudentStore`] owns the id-to-student map and the next-id counter.
//! Both live behind one [`RwLock`], so concurrent creates never hand out
//! the same id and readers always see a consistent map.

use std::collections::BTreeMap;

use roster_types::{Student, StudentId};
use tokio::sync::RwLock;

/// State guarded by the store lock.
#[derive(Debug)]
struct Registry {
    students: BTreeMap<StudentId, Student>,
    /// `None` once `i64::MAX` has been handed out.
    next_id: Option<StudentId>,
}

/// Lock-guarded registry of students keyed by store-assigned id.
///
/// Ids start at 1, increase by one per create, and are never reused
/// after a delete. Callers validate records before handing them in.
#[derive(Debug)]
pub struct StudentStore {
    inner: RwLock<Registry>,
}

impl StudentStore {
    /// Create an empty store whose first id will be 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Registry {
                students: BTreeMap::new(),
                next_id: Some(StudentId::FIRST),
            }),
        }
    }

    /// Insert `student` under the next id and return the stored copy.
    ///
    /// Returns `None`, storing nothing, once every id up to `i64::MAX`
    /// has been used.
    pub async fn create(&self, student: Student) -> Option<Student> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id?;
        inner.next_id = id.next();
        let stored = student.with_id(id);
        inner.students.insert(id, stored.clone());
        Some(stored)
    }

    /// Snapshot of every stored student, in ascending id order.
    pub async fn get_all(&self) -> Vec<Student> {
        let inner = self.inner.read().await;
        inner.students.values().cloned().collect()
    }

    /// Look up a student by id.
    pub async fn get(&self, id: StudentId) -> Option<Student> {
        let inner = self.inner.read().await;
        inner.students.get(&id).cloned()
    }

    /// Replace the student stored under `id`, keeping that id.
    ///
    /// Returns `None` without storing anything if `id` is unknown. The
    /// replacement is total: no field of the old record survives.
    pub async fn update(&self, id: StudentId, student: Student) -> Option<Student> {
        let mut inner = self.inner.write().await;
        let slot = inner.students.get_mut(&id)?;
        *slot = student.with_id(id);
        Some(slot.clone())
    }

    /// Remove the student stored under `id`. Returns whether one existed.
    pub async fn delete(&self, id: StudentId) -> bool {
        let mut inner = self.inner.write().await;
        inner.students.remove(&id).is_some()
    }

    /// Number of stored students.
    pub async fn len(&self) -> usize {
        self.inner.read().await.students.len()
    }

    /// Whether the store holds no students.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.students.is_empty()
    }
}

impl Default for StudentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn ann() -> Student {
        Student::new("Ann", 20, "a@b.com")
    }

    #[tokio::test]
    async fn ids_start_at_one_and_increase() {
        let store = StudentStore::new();
        let a = store.create(ann()).await;
        let b = store.create(Student::new("Bo", 30, "b@c.com")).await;
        assert_eq!(a.map(|s| s.id), Some(StudentId(1)));
        assert_eq!(b.map(|s| s.id), Some(StudentId(2)));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn create_ignores_incoming_id() {
        let store = StudentStore::new();
        let created = store.create(ann().with_id(StudentId(42))).await;
        assert_eq!(created.map(|s| s.id), Some(StudentId(1)));
        assert!(store.get(StudentId(42)).await.is_none());
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let store = StudentStore::new();
        store.create(ann()).await;
        assert!(store.get(StudentId(99)).await.is_none());
        assert!(store.update(StudentId(99), ann()).await.is_none());
        assert!(!store.delete(StudentId(99)).await);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_replaces_whole_record() {
        let store = StudentStore::new();
        store.create(ann()).await;

        let updated = store
            .update(StudentId(1), Student::new("X", 5, "x@x").with_id(StudentId(7)))
            .await;
        let expected = Student::new("X", 5, "x@x").with_id(StudentId(1));
        assert_eq!(updated.as_ref(), Some(&expected));
        assert_eq!(store.get(StudentId(1)).await, Some(expected));
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let store = StudentStore::new();
        store.create(ann()).await;
        assert!(store.delete(StudentId(1)).await);
        assert!(store.get(StudentId(1)).await.is_none());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = StudentStore::new();
        store.create(ann()).await;
        store.delete(StudentId(1)).await;
        assert_eq!(store.create(ann()).await.map(|s| s.id), Some(StudentId(2)));
    }

    #[tokio::test]
    async fn get_all_is_a_snapshot() {
        let store = StudentStore::new();
        assert!(store.get_all().await.is_empty());

        store.create(ann()).await;
        store.create(ann()).await;
        let snapshot = store.get_all().await;
        store.delete(StudentId(1)).await;

        let ids: Vec<StudentId> = snapshot.iter().map(|s| s.id).collect();
        assert_eq!(ids, [StudentId(1), StudentId(2)]);
    }

    #[tokio::test]
    async fn concurrent_creates_get_unique_contiguous_ids() {
        let store = Arc::new(StudentStore::new());
        let mut tasks = tokio::task::JoinSet::new();
        for _ in 0..64 {
            let store = Arc::clone(&store);
            tasks.spawn(async move { store.create(ann()).await.map(|s| s.id) });
        }

        let mut ids = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            if let Ok(Some(id)) = joined {
                ids.push(id.into_inner());
            }
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=64).collect::<Vec<i64>>());
    }

    #[tokio::test]
    async fn exhausted_ids_refuse_instead_of_overwriting() {
        let store = StudentStore::new();
        store.inner.write().await.next_id = Some(StudentId(i64::MAX));

        let last = store.create(ann()).await;
        assert_eq!(last.map(|s| s.id), Some(StudentId(i64::MAX)));

        let refused = store.create(Student::new("Bo", 30, "b@c.com")).await;
        assert!(refused.is_none());
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get(StudentId(i64::MAX)).await.map(|s| s.name),
            Some("Ann".to_owned())
        );
    }
}
