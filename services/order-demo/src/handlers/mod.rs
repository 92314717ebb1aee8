//! HTTP handlers exercising the halyard assembly contract

pub mod books;
pub mod orders;
pub mod shipments;
