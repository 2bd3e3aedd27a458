pub mod currency;
pub mod fees;
pub mod quote;
pub mod transaction;
