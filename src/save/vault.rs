use super::store::Store;
use crate::Chips;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process store for running without a database.
/// Unknown names are created on first write.
#[derive(Debug, Default)]
pub struct Vault {
    chips: Mutex<HashMap<String, Chips>>,
}

impl Vault {
    pub fn chips(&self, name: &str) -> Option<Chips> {
        self.chips
            .lock()
            .expect("vault lock")
            .get(name)
            .copied()
    }
    pub fn len(&self) -> usize {
        self.chips.lock().expect("vault lock").len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl Store for Vault {
    async fn update_chips(&self, name: &str, stack: Chips) -> anyhow::Result<()> {
        self.chips
            .lock()
            .map_err(|_| anyhow::anyhow!("vault poisoned"))?
            .insert(name.to_string(), stack);
        log::debug!("[vault] {} -> {}", name, stack);
        Ok(())
    }
}
