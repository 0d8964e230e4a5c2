pub mod pagination;
pub mod quiz;
pub mod search;
