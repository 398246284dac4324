use crate::Chips;

/// Durable player records, owned by an external collaborator.
/// The match engine only ever writes final stacks back at settlement.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn update_chips(&self, name: &str, stack: Chips) -> anyhow::Result<()>;
}
