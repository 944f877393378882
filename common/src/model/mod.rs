pub mod campaign;
pub mod contact;
pub mod filter;
