//! In-memory store for dev/test.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use sweetshop_auth::{NewUser, User};
use sweetshop_catalog::{NewSweet, Sweet, SweetPatch, purchase_stock, restock_stock};
use sweetshop_core::{DomainError, SweetId};

use crate::{StoreError, StoreResult, SweetStore, UserStore};

/// In-memory store.
///
/// Stock mutations perform their read-check-write entirely under the sweets
/// write lock, which serializes concurrent restock/purchase on the same item.
#[derive(Debug)]
pub struct MemoryStore {
    users: RwLock<HashMap<String, User>>,
    sweets: RwLock<BTreeMap<SweetId, Sweet>>,
    next_user_id: AtomicI64,
    next_sweet_id: AtomicI64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            sweets: RwLock::new(BTreeMap::new()),
            next_user_id: AtomicI64::new(1),
            next_sweet_id: AtomicI64::new(1),
        }
    }

    fn users_write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, HashMap<String, User>>> {
        self.users.write().map_err(|_| StoreError::backend("users lock poisoned"))
    }

    fn users_read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, HashMap<String, User>>> {
        self.users.read().map_err(|_| StoreError::backend("users lock poisoned"))
    }

    fn sweets_write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, BTreeMap<SweetId, Sweet>>> {
        self.sweets.write().map_err(|_| StoreError::backend("sweets lock poisoned"))
    }

    fn sweets_read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, BTreeMap<SweetId, Sweet>>> {
        self.sweets.read().map_err(|_| StoreError::backend("sweets lock poisoned"))
    }

    /// Read-check-write a single sweet's stock under the write lock.
    fn mutate_stock(
        &self,
        id: SweetId,
        transition: impl FnOnce(i64) -> Result<i64, DomainError>,
    ) -> StoreResult<i64> {
        let mut sweets = self.sweets_write()?;
        let sweet = sweets.get_mut(&id).ok_or(DomainError::NotFound)?;
        let new_stock = transition(sweet.stock)?;
        sweet.stock = new_stock;
        Ok(new_stock)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> StoreResult<User> {
        let mut users = self.users_write()?;
        if users.contains_key(&user.username) {
            return Err(DomainError::conflict("username already registered").into());
        }

        let record = User {
            id: self.next_user_id.fetch_add(1, Ordering::Relaxed),
            username: user.username.clone(),
            password_digest: user.password_digest,
            role: user.role,
        };
        users.insert(user.username, record.clone());
        Ok(record)
    }

    async fn find_user(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self.users_read()?.get(username).cloned())
    }
}

#[async_trait]
impl SweetStore for MemoryStore {
    async fn insert_sweet(&self, draft: NewSweet) -> StoreResult<Sweet> {
        let sweet = Sweet {
            id: SweetId::new(self.next_sweet_id.fetch_add(1, Ordering::Relaxed)),
            name: draft.name,
            category: draft.category,
            price: draft.price,
            stock: draft.stock,
        };
        self.sweets_write()?.insert(sweet.id, sweet.clone());
        Ok(sweet)
    }

    async fn get_sweet(&self, id: SweetId) -> StoreResult<Option<Sweet>> {
        Ok(self.sweets_read()?.get(&id).cloned())
    }

    async fn list_sweets(&self) -> StoreResult<Vec<Sweet>> {
        Ok(self.sweets_read()?.values().cloned().collect())
    }

    async fn search_sweets(&self, query: &str) -> StoreResult<Vec<Sweet>> {
        let sweets = self.sweets_read()?;
        if query.is_empty() {
            return Ok(sweets.values().cloned().collect());
        }
        Ok(sweets
            .values()
            .filter(|s| s.matches_query(query))
            .cloned()
            .collect())
    }

    async fn update_sweet(&self, id: SweetId, patch: SweetPatch) -> StoreResult<Sweet> {
        let mut sweets = self.sweets_write()?;
        let sweet = sweets.get_mut(&id).ok_or(DomainError::NotFound)?;
        patch.apply(sweet);
        Ok(sweet.clone())
    }

    async fn delete_sweet(&self, id: SweetId) -> StoreResult<()> {
        let mut sweets = self.sweets_write()?;
        sweets.remove(&id).ok_or(DomainError::NotFound)?;
        Ok(())
    }

    async fn restock(&self, id: SweetId, quantity: i64) -> StoreResult<i64> {
        self.mutate_stock(id, |stock| restock_stock(stock, quantity))
    }

    async fn purchase(&self, id: SweetId, quantity: i64) -> StoreResult<i64> {
        self.mutate_stock(id, |stock| purchase_stock(stock, quantity))
    }
}
