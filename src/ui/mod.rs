/// UI module exports
pub mod app;
pub mod cards;
pub mod components;
