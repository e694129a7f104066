//----------------------------------------
// design mod
//----------------------------------------
pub mod error;
pub mod resolve;
pub mod types;
pub mod validate;
