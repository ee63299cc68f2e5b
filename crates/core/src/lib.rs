pub mod column;
pub mod money;
pub mod record;

pub use column::Column;
pub use money::Amount;
pub use record::TransactionRecord;
