pub mod batch;
pub mod kind;
pub mod scores;
