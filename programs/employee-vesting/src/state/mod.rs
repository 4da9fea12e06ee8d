pub mod employee_account;
pub mod vesting_account;

pub use employee_account::*;
pub use vesting_account::*;
