//! Infrastructure layer - Guards, upstream client, tokens and assets

pub mod auth;
pub mod broker;
pub mod guard;
pub mod logging;
pub mod pages;
