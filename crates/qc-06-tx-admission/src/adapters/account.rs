//! Account store adapter over a `KvStore`.

use crate::domain::AnteError;
use crate::ports::{AccountStore, KvStore};
use shared_types::{address_to_hex, Address, BaseAccount};

/// Key prefix for account records.
pub const ACCOUNT_PREFIX: u8 = 0x01;

/// Key holding the next account number to hand out.
pub const NEXT_ACCOUNT_NUMBER_KEY: &[u8] = &[0x00];

/// Reads and writes bincode-encoded `BaseAccount` records under
/// `ACCOUNT_PREFIX || address`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountKeeper;

impl AccountKeeper {
    pub fn new() -> Self {
        Self
    }

    pub fn account_key(address: &Address) -> Vec<u8> {
        let mut key = Vec::with_capacity(1 + address.len());
        key.push(ACCOUNT_PREFIX);
        key.extend_from_slice(address);
        key
    }

    /// Creates and stores an account with the next free account number.
    pub fn new_account(
        &self,
        store: &mut dyn KvStore,
        address: Address,
    ) -> Result<BaseAccount, AnteError> {
        let number = self.next_account_number(store)?;
        let account = BaseAccount::new(address, number);
        self.set_account(store, &account)?;
        Ok(account)
    }

    fn next_account_number(&self, store: &mut dyn KvStore) -> Result<u64, AnteError> {
        let current = match store.get(NEXT_ACCOUNT_NUMBER_KEY) {
            Some(bytes) => bincode::deserialize::<u64>(&bytes)
                .map_err(|e| AnteError::Internal(format!("corrupt account number: {}", e)))?,
            None => 0,
        };
        let next = current
            .checked_add(1)
            .ok_or_else(|| AnteError::Internal("account numbers exhausted".to_string()))?;
        let encoded = bincode::serialize(&next).map_err(|e| AnteError::Internal(e.to_string()))?;
        store.set(NEXT_ACCOUNT_NUMBER_KEY, encoded);
        Ok(current)
    }
}

impl AccountStore for AccountKeeper {
    fn get_account(
        &self,
        store: &dyn KvStore,
        address: &Address,
    ) -> Result<Option<BaseAccount>, AnteError> {
        let Some(bytes) = store.get(&Self::account_key(address)) else {
            return Ok(None);
        };
        bincode::deserialize(&bytes).map(Some).map_err(|e| {
            AnteError::Internal(format!(
                "corrupt account {}: {}",
                address_to_hex(address),
                e
            ))
        })
    }

    fn set_account(&self, store: &mut dyn KvStore, account: &BaseAccount) -> Result<(), AnteError> {
        let encoded =
            bincode::serialize(account).map_err(|e| AnteError::Internal(e.to_string()))?;
        store.set(&Self::account_key(&account.address), encoded);
        Ok(())
    }
}
