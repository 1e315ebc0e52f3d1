// src/store.rs
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::dtos::sale::SaleChanges;
use crate::models::sale::Sale;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("sale id space exhausted")]
    IdsExhausted,
}

/// Storage behind the sales routes.
///
/// Handlers only talk to this trait, so a durable engine can replace the
/// in-memory one without touching the router. `None` means "no such id".
pub trait SaleStore: Send + Sync {
    /// Every sale currently held, in insertion order.
    fn list_all(&self) -> Vec<Sale>;

    /// Store a new sale under the next free id and return it.
    fn insert(&self, changes: SaleChanges) -> Result<Sale, StoreError>;

    fn find_by_id(&self, id: i32) -> Option<Sale>;

    /// Replace `customer_name` and `total` of an existing sale. The id is kept.
    fn update(&self, id: i32, changes: SaleChanges) -> Option<Sale>;

    /// Delete a sale and hand it back.
    fn remove(&self, id: i32) -> Option<Sale>;
}

#[derive(Debug)]
struct Inner {
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<i32>,
    sales: BTreeMap<i32, Sale>,
}

/// Process-lifetime store. One mutex guards both the records and the id
/// counter; ids grow monotonically from 1 and are never reused.
#[derive(Debug)]
pub struct InMemorySaleStore {
    inner: Mutex<Inner>,
}

impl InMemorySaleStore {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    fn starting_at(first_id: i32) -> Self {
        Self {
            inner: Mutex::new(Inner {
                next_id: Some(first_id),
                sales: BTreeMap::new(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.lock().sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // No operation leaves `Inner` half-written, so a poisoned lock is still usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemorySaleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SaleStore for InMemorySaleStore {
    fn list_all(&self) -> Vec<Sale> {
        self.lock().sales.values().cloned().collect()
    }

    fn insert(&self, changes: SaleChanges) -> Result<Sale, StoreError> {
        let mut inner = self.lock();
        let id = inner.next_id.ok_or(StoreError::IdsExhausted)?;
        inner.next_id = id.checked_add(1);

        let sale = Sale {
            id,
            customer_name: changes.customer_name,
            total: changes.total,
        };
        inner.sales.insert(id, sale.clone());
        Ok(sale)
    }

    fn find_by_id(&self, id: i32) -> Option<Sale> {
        self.lock().sales.get(&id).cloned()
    }

    fn update(&self, id: i32, changes: SaleChanges) -> Option<Sale> {
        let mut inner = self.lock();
        let sale = inner.sales.get_mut(&id)?;
        sale.customer_name = changes.customer_name;
        sale.total = changes.total;
        Some(sale.clone())
    }

    fn remove(&self, id: i32) -> Option<Sale> {
        self.lock().sales.remove(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(name: &str, total: i32) -> SaleChanges {
        SaleChanges {
            customer_name: Some(name.to_string()),
            total,
        }
    }

    #[test]
    fn insert_assigns_ids_from_one() {
        let store = InMemorySaleStore::new();
        let first = store.insert(changes("Ana", 500)).unwrap();
        let second = store.insert(changes("Luis", 20)).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.find_by_id(1), Some(first));
    }

    #[test]
    fn ids_are_not_reused_after_remove() {
        let store = InMemorySaleStore::new();
        store.insert(changes("Ana", 500)).unwrap();
        let removed = store.remove(1).unwrap();
        assert_eq!(removed.customer_name.as_deref(), Some("Ana"));

        let next = store.insert(changes("Luis", 20)).unwrap();
        assert_eq!(next.id, 2);
        assert!(store.find_by_id(1).is_none());
    }

    #[test]
    fn update_replaces_fields_and_keeps_id() {
        let store = InMemorySaleStore::new();
        store.insert(changes("Ana", 500)).unwrap();

        let updated = store
            .update(
                1,
                SaleChanges {
                    customer_name: None,
                    total: 750,
                },
            )
            .unwrap();

        assert_eq!(updated.id, 1);
        assert_eq!(updated.customer_name, None);
        assert_eq!(updated.total, 750);
        assert_eq!(store.find_by_id(1), Some(updated));
    }

    #[test]
    fn update_missing_id_leaves_store_untouched() {
        let store = InMemorySaleStore::new();
        store.insert(changes("Ana", 500)).unwrap();
        let before = store.list_all();

        assert!(store.update(42, changes("Ghost", 1)).is_none());
        assert_eq!(store.list_all(), before);
    }

    #[test]
    fn remove_twice_reports_absence() {
        let store = InMemorySaleStore::new();
        store.insert(changes("Ana", 500)).unwrap();

        assert!(store.remove(1).is_some());
        assert!(store.remove(1).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn list_all_reflects_creates_minus_deletes_in_insertion_order() {
        let store = InMemorySaleStore::new();
        for i in 0..5 {
            store.insert(changes(&format!("customer-{i}"), i * 10)).unwrap();
        }
        store.remove(2);
        store.remove(4);
        store.update(3, changes("renamed", 99));

        let all = store.list_all();
        let ids: Vec<i32> = all.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
        assert_eq!(all[1].customer_name.as_deref(), Some("renamed"));
        assert_eq!(all[1].total, 99);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn concurrent_inserts_get_distinct_ids() {
        use std::sync::Arc;

        let store = Arc::new(InMemorySaleStore::new());
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    (0..50)
                        .map(|i| store.insert(changes("c", t * 100 + i)).unwrap().id)
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 400);
        assert_eq!(ids.first(), Some(&1));
        assert_eq!(ids.last(), Some(&400));
    }

    #[test]
    fn insert_fails_once_ids_run_out() {
        let store = InMemorySaleStore::starting_at(i32::MAX);

        let last = store.insert(changes("Ana", 500)).unwrap();
        assert_eq!(last.id, i32::MAX);

        assert_eq!(store.insert(changes("Luis", 20)), Err(StoreError::IdsExhausted));
        assert_eq!(store.len(), 1);
    }
}
