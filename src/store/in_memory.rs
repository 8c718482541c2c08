//! EmployeeStore - BTreeMap-backed employee table with validated CRUD.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::{debug, warn};

use super::Records;
use crate::config::{ConfigError, StoreConfig};
use crate::employee::{Employee, EmployeeField, EmployeeId};
use crate::error::{StoreError, StoreResult};
use crate::observer::{NoopObserver, StoreEvent, StoreObserver};
use crate::validation::{validate_employee, validate_field};

type Table = BTreeMap<EmployeeId, Employee>;

/// In-memory employee store.
///
/// Every mutation holds the write lock for its whole duration, so readers
/// never see a half-applied change. Clone-friendly via Arc: clones share the
/// same table, config and observer.
#[derive(Clone)]
pub struct EmployeeStore {
    storage: Arc<RwLock<Table>>,
    config: Arc<StoreConfig>,
    observer: Arc<dyn StoreObserver>,
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore {
    /// Create an empty store with the default departments and no observer.
    pub fn new() -> Self {
        Self::from_parts(StoreConfig::default(), Arc::new(NoopObserver))
    }

    /// Create an empty store with the default config that reports to `observer`.
    pub fn with_observer(observer: impl StoreObserver + 'static) -> Self {
        Self::from_parts(StoreConfig::default(), Arc::new(observer))
    }

    /// Create an empty store from a validated config.
    pub fn with_config(
        config: StoreConfig,
        observer: impl StoreObserver + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, Arc::new(observer)))
    }

    fn from_parts(config: StoreConfig, observer: Arc<dyn StoreObserver>) -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            config: Arc::new(config),
            observer,
        }
    }

    /// Insert a new record. Fails with [`StoreError::DuplicateKey`] if the
    /// key is taken; the existing record is left as it was.
    pub fn create(&self, employee: Employee) -> StoreResult<EmployeeId> {
        let employee = self
            .insert(employee)
            .map_err(|err| self.rejected("create", err))?;
        let id = employee.id;
        self.applied("create", StoreEvent::Created { employee });
        Ok(id)
    }

    /// Like [`create`](Self::create) for hosts holding optional input.
    pub fn create_from(&self, employee: Option<Employee>) -> StoreResult<EmployeeId> {
        match employee {
            Some(employee) => self.create(employee),
            None => Err(self.rejected("create", StoreError::InvalidRecord)),
        }
    }

    fn insert(&self, employee: Employee) -> StoreResult<Employee> {
        let mut storage = self.write_storage("create")?;
        if storage.contains_key(&employee.id) {
            return Err(StoreError::DuplicateKey(employee.id));
        }
        validate_employee(&employee, &self.config.departments)?;
        storage.insert(employee.id, employee.clone());
        Ok(employee)
    }

    pub fn read(&self, id: EmployeeId) -> StoreResult<Employee> {
        self.read_storage("read")?
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Replace one attribute. The record is only touched once the new value
    /// has passed the same checks as [`create`](Self::create).
    pub fn update(&self, id: EmployeeId, field: EmployeeField) -> StoreResult<Employee> {
        let name = field.name();
        let employee = self
            .apply_update(id, field)
            .map_err(|err| self.rejected("update", err))?;
        self.applied(
            "update",
            StoreEvent::Updated {
                field: name,
                employee: employee.clone(),
            },
        );
        Ok(employee)
    }

    /// Update from a field name and an untyped value. See [`EmployeeField::parse`].
    pub fn update_by_name(
        &self,
        id: EmployeeId,
        field_name: &str,
        value: Value,
    ) -> StoreResult<Employee> {
        let field =
            EmployeeField::parse(field_name, value).map_err(|err| self.rejected("update", err))?;
        self.update(id, field)
    }

    fn apply_update(&self, id: EmployeeId, field: EmployeeField) -> StoreResult<Employee> {
        let mut storage = self.write_storage("update")?;
        let employee = storage.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        validate_field(&field, &self.config.departments)?;
        employee.apply(field);
        Ok(employee.clone())
    }

    /// Remove a record and hand it back.
    pub fn delete(&self, id: EmployeeId) -> StoreResult<Employee> {
        let removed = self
            .write_storage("delete")
            .and_then(|mut storage| storage.remove(&id).ok_or(StoreError::NotFound(id)))
            .map_err(|err| self.rejected("delete", err))?;
        self.applied(
            "delete",
            StoreEvent::Deleted {
                employee: removed.clone(),
            },
        );
        Ok(removed)
    }

    pub fn all(&self) -> StoreResult<Vec<Employee>> {
        self.snapshot()
    }

    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_storage("len")?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_storage("is_empty")?.is_empty())
    }

    pub fn contains(&self, id: EmployeeId) -> StoreResult<bool> {
        Ok(self.read_storage("contains")?.contains_key(&id))
    }

    fn read_storage(&self, operation: &'static str) -> StoreResult<RwLockReadGuard<'_, Table>> {
        self.storage
            .read()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    pub(crate) fn write_storage(
        &self,
        operation: &'static str,
    ) -> StoreResult<RwLockWriteGuard<'_, Table>> {
        self.storage
            .write()
            .map_err(|_| StoreError::LockPoisoned(operation))
    }

    /// Log and publish a successful mutation. Call after the lock is released.
    pub(crate) fn applied(&self, operation: &'static str, event: StoreEvent) {
        debug!(operation, event = event.event_type(), "store mutation applied");
        self.observer.notify(&event);
    }

    /// Log and publish a failed operation, handing the error back.
    pub(crate) fn rejected(&self, operation: &'static str, error: StoreError) -> StoreError {
        warn!(operation, kind = error.kind(), %error, "store operation rejected");
        self.observer.notify(&StoreEvent::rejected(operation, &error));
        error
    }
}

impl Records for EmployeeStore {
    fn snapshot(&self) -> StoreResult<Vec<Employee>> {
        Ok(self.read_storage("snapshot")?.values().cloned().collect())
    }

    fn config(&self) -> &StoreConfig {
        &self.config
    }
}
