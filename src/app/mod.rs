// src/app/mod.rs
//! Data layer for front ends of the prompt directory.
//!
//! Holds no rendering code: a UI drives [`DirectoryState`] with [`Action`]s
//! and talks to the server through [`DirectoryClient`].

pub mod client;
pub mod state;
pub mod tags;

pub use crate::model::IconName;
pub use client::DirectoryClient;
pub use state::{
    Action, CategoryFilter, DirectoryState, SortBy, Theme, View, ViewMode, ViewSettings,
};
pub use tags::TagList;
