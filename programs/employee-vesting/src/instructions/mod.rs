pub mod claim_tokens;
pub mod create_employee_vesting;
pub mod create_vesting_account;
pub mod fund_treasury;
pub mod quote_claimable;

pub use claim_tokens::*;
pub use create_employee_vesting::*;
pub use create_vesting_account::*;
pub use fund_treasury::*;
pub use quote_claimable::*;
