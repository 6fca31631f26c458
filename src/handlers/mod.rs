pub mod activity;
pub mod root;
