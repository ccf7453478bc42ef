//! In-memory doubles for the wallet and record store traits.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use async_trait::async_trait;
use shared::dto::registration::{NewRegistration, RegistrationEntry};
use tokio::sync::Notify;

use super::store::RegistrationStore;
use super::wallet::WalletProvider;
use crate::error::{StoreError, WalletError};

pub struct MockWallet {
    pub address: RefCell<Option<String>>,
    pub connect_result: RefCell<Result<String, WalletError>>,
    pub connect_calls: Cell<usize>,
    pub disconnect_calls: Cell<usize>,
    /// When set, `connect` waits for a notification before resolving
    pub gate: Option<Rc<Notify>>,
    handler: RefCell<Option<Box<dyn Fn(Option<String>)>>>,
}

impl MockWallet {
    pub fn approving(address: &str) -> Rc<Self> {
        Rc::new(Self::with_result(Ok(address.to_string())))
    }

    pub fn rejecting(message: &str) -> Rc<Self> {
        Rc::new(Self::with_result(Err(WalletError::Rejected(message.to_string()))))
    }

    pub fn gated(address: &str, gate: Rc<Notify>) -> Rc<Self> {
        Rc::new(Self {
            gate: Some(gate),
            ..Self::with_result(Ok(address.to_string()))
        })
    }

    pub fn already_connected(address: &str) -> Rc<Self> {
        let wallet = Self::with_result(Ok(address.to_string()));
        *wallet.address.borrow_mut() = Some(address.to_string());
        Rc::new(wallet)
    }

    fn with_result(result: Result<String, WalletError>) -> Self {
        Self {
            address: RefCell::new(None),
            connect_result: RefCell::new(result),
            connect_calls: Cell::new(0),
            disconnect_calls: Cell::new(0),
            gate: None,
            handler: RefCell::new(None),
        }
    }

    /// Simulate the extension switching accounts.
    pub fn switch_account(&self, address: Option<&str>) {
        *self.address.borrow_mut() = address.map(str::to_string);
        if let Some(handler) = self.handler.borrow().as_ref() {
            handler(address.map(str::to_string));
        }
    }
}

#[async_trait(?Send)]
impl WalletProvider for MockWallet {
    fn name(&self) -> &'static str {
        "Mock"
    }

    fn current_address(&self) -> Option<String> {
        self.address.borrow().clone()
    }

    async fn connect(&self) -> Result<String, WalletError> {
        self.connect_calls.set(self.connect_calls.get() + 1);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        let result = self.connect_result.borrow().clone();
        if let Ok(address) = &result {
            *self.address.borrow_mut() = Some(address.clone());
        }
        result
    }

    async fn disconnect(&self) -> Result<(), WalletError> {
        self.disconnect_calls.set(self.disconnect_calls.get() + 1);
        *self.address.borrow_mut() = None;
        Ok(())
    }

    fn subscribe_account_changed(&self, handler: Box<dyn Fn(Option<String>)>) {
        *self.handler.borrow_mut() = Some(handler);
    }
}

pub struct MockStore {
    pub inserts: RefCell<Vec<NewRegistration>>,
    pub insert_result: RefCell<Result<(), StoreError>>,
    pub fetch_result: RefCell<Result<Vec<RegistrationEntry>, StoreError>>,
    pub fetch_calls: Cell<usize>,
}

impl MockStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            inserts: RefCell::new(vec![]),
            insert_result: RefCell::new(Ok(())),
            fetch_result: RefCell::new(Ok(vec![])),
            fetch_calls: Cell::new(0),
        })
    }

    pub fn failing_inserts(error: StoreError) -> Rc<Self> {
        let store = Self::new();
        *store.insert_result.borrow_mut() = Err(error);
        store
    }

    pub fn with_entries(entries: Vec<RegistrationEntry>) -> Rc<Self> {
        let store = Self::new();
        *store.fetch_result.borrow_mut() = Ok(entries);
        store
    }
}

#[async_trait(?Send)]
impl RegistrationStore for MockStore {
    async fn insert(&self, entry: &NewRegistration) -> Result<(), StoreError> {
        self.inserts.borrow_mut().push(entry.clone());
        self.insert_result.borrow().clone()
    }

    async fn fetch_all(&self) -> Result<Vec<RegistrationEntry>, StoreError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.fetch_result.borrow().clone()
    }
}
