mod entry;
mod ledger;
mod money;
mod month;

pub use entry::*;
pub use ledger::*;
pub use money::*;
pub use month::*;
