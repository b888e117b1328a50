/// Use cases module containing application business logic orchestration
mod assess_inventory;

pub use assess_inventory::AssessInventoryUseCase;
