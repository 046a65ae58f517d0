//! In-memory task store, the single source of truth during a session.
//!
//! The store owns the canonical ordered task list and keeps the storage
//! backend in sync: it hydrates from storage on open (seeding a fresh
//! board), and persists the whole list after every mutation. The list is
//! append-only; nothing reorders or deletes tasks.

use crate::error::{StorageError, StoreError};
use crate::fields::Status;
use crate::seed::seed_tasks;
use crate::storage::Storage;
use crate::task::Task;

/// Ordered task list bound to a storage backend.
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Box<dyn Storage>,
}

impl TaskStore {
    /// Hydrate a store from the given backend.
    ///
    /// An empty backend is seeded with the built-in default tasks, and the
    /// seed is persisted immediately so later opens find a non-empty board.
    pub fn open(storage: Box<dyn Storage>) -> Result<Self, StorageError> {
        let mut tasks = storage.load();
        if tasks.is_empty() {
            tasks = seed_tasks();
            storage.save(&tasks)?;
        }
        Ok(Self { tasks, storage })
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// ID the next created task will receive: the last task's id + 1, or 1
    /// for an empty list. The list is append-only, so the last id is also
    /// the largest one.
    pub fn next_id(&self) -> u64 {
        self.tasks.last().map_or(1, |t| t.id + 1)
    }

    /// Append a task and persist the whole list.
    ///
    /// If persisting fails the append is rolled back, leaving memory and
    /// storage consistent with each other.
    pub fn append(&mut self, task: Task) -> Result<(), StorageError> {
        self.tasks.push(task);
        if let Err(e) = self.storage.save(&self.tasks) {
            self.tasks.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Create a task from raw form values and append it.
    ///
    /// Title and description are trimmed; a title that is empty after
    /// trimming is rejected and nothing is mutated. Returns the new
    /// task's id.
    pub fn create(
        &mut self,
        title: &str,
        description: &str,
        status: Status,
    ) -> Result<u64, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let task = Task {
            id: self.next_id(),
            title: title.to_string(),
            description: description.trim().to_string(),
            status,
        };
        let id = task.id;
        self.append(task)?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// In-memory backend with a shared handle so tests can inspect what
    /// was persisted after the store takes ownership of the box.
    #[derive(Default)]
    struct MemoryStorage {
        saved: Rc<RefCell<Vec<Task>>>,
        fail_writes: Rc<Cell<bool>>,
    }

    impl MemoryStorage {
        fn with_tasks(tasks: Vec<Task>) -> Self {
            let storage = MemoryStorage::default();
            *storage.saved.borrow_mut() = tasks;
            storage
        }

        fn handle(&self) -> (Rc<RefCell<Vec<Task>>>, Rc<Cell<bool>>) {
            (Rc::clone(&self.saved), Rc::clone(&self.fail_writes))
        }
    }

    impl Storage for MemoryStorage {
        fn load(&self) -> Vec<Task> {
            self.saved.borrow().clone()
        }

        fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
            if self.fail_writes.get() {
                return Err(StorageError::Write {
                    path: "memory".into(),
                    source: std::io::Error::other("write disabled"),
                });
            }
            *self.saved.borrow_mut() = tasks.to_vec();
            Ok(())
        }
    }

    fn task(id: u64, title: &str, status: Status) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            status,
        }
    }

    #[test]
    fn empty_backend_is_seeded_and_seed_is_persisted() {
        let storage = MemoryStorage::default();
        let (saved, _) = storage.handle();

        let store = TaskStore::open(Box::new(storage)).unwrap();

        assert_eq!(store.tasks(), seed_tasks().as_slice());
        // The seed reached storage before anything was rendered or mutated.
        assert_eq!(*saved.borrow(), seed_tasks());
    }

    #[test]
    fn non_empty_backend_is_not_reseeded() {
        let existing = vec![task(7, "Keep me", Status::Doing)];
        let storage = MemoryStorage::with_tasks(existing.clone());

        let store = TaskStore::open(Box::new(storage)).unwrap();
        assert_eq!(store.tasks(), existing.as_slice());
    }

    #[test]
    fn next_id_is_one_for_empty_list_and_last_plus_one_otherwise() {
        let storage = MemoryStorage::with_tasks(Vec::new());
        // An explicitly empty backend still gets seeded, so build the store
        // first and reason from its contents.
        let mut store = TaskStore::open(Box::new(storage)).unwrap();
        store.tasks.clear();
        assert_eq!(store.next_id(), 1);

        store.tasks = vec![
            task(1, "a", Status::Todo),
            task(2, "b", Status::Done),
        ];
        assert_eq!(store.next_id(), 3);
    }

    #[test]
    fn append_persists_and_grows_by_one() {
        let storage = MemoryStorage::with_tasks(vec![task(1, "first", Status::Todo)]);
        let (saved, _) = storage.handle();
        let mut store = TaskStore::open(Box::new(storage)).unwrap();

        let new_task = task(2, "second", Status::Doing);
        store.append(new_task.clone()).unwrap();

        let persisted = saved.borrow();
        assert_eq!(persisted.len(), 2);
        assert_eq!(persisted.last(), Some(&new_task));
    }

    #[test]
    fn create_trims_fields_and_assigns_next_id() {
        let existing = vec![
            task(1, "one", Status::Todo),
            task(2, "two", Status::Done),
        ];
        let storage = MemoryStorage::with_tasks(existing);
        let (saved, _) = storage.handle();
        let mut store = TaskStore::open(Box::new(storage)).unwrap();

        let id = store.create("  Buy milk  ", "", Status::Doing).unwrap();

        assert_eq!(id, 3);
        let created = store.get(3).unwrap();
        assert_eq!(created.title, "Buy milk");
        assert_eq!(created.description, "");
        assert_eq!(created.status, Status::Doing);
        assert_eq!(saved.borrow().last(), Some(created));
    }

    #[test]
    fn create_rejects_blank_title_without_mutating() {
        let storage = MemoryStorage::with_tasks(vec![task(1, "only", Status::Todo)]);
        let (saved, _) = storage.handle();
        let mut store = TaskStore::open(Box::new(storage)).unwrap();

        let err = store.create("   ", "details", Status::Todo).unwrap_err();
        assert!(matches!(err, StoreError::EmptyTitle));
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(saved.borrow().len(), 1);
    }

    #[test]
    fn failed_save_rolls_back_the_append() {
        let storage = MemoryStorage::with_tasks(vec![task(1, "only", Status::Todo)]);
        let (saved, fail_writes) = storage.handle();
        let mut store = TaskStore::open(Box::new(storage)).unwrap();

        fail_writes.set(true);
        let err = store.create("New", "", Status::Doing).unwrap_err();
        assert!(matches!(err, StoreError::Storage(_)));

        // Neither the in-memory list nor the snapshot gained the task.
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(saved.borrow().len(), 1);
    }

    #[test]
    fn file_backed_round_trip_through_open() {
        use crate::storage::JsonFileStorage;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        {
            let mut store =
                TaskStore::open(Box::new(JsonFileStorage::new(path.clone()))).unwrap();
            store.create("Across sessions", "survives reopen", Status::Todo).unwrap();
        }

        let reopened = TaskStore::open(Box::new(JsonFileStorage::new(path))).unwrap();
        assert_eq!(reopened.tasks().len(), 4); // 3 seeded + 1 created
        let last = reopened.tasks().last().unwrap();
        assert_eq!(last.id, 4);
        assert_eq!(last.title, "Across sessions");
    }
}
