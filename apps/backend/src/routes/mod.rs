pub mod auth;
pub mod catalog;
pub mod learner;
pub mod stats;
pub mod study;
pub mod words;
