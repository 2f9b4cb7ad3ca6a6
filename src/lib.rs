//! LogicMods - load order management for UE4SS logic mods
//!
//! Library crate for discovering installed logic mod folders, reconciling
//! them against the saved load order manifest, and writing the manifest
//! back for the game engine loader. Presentation layers read the shared
//! load order state; they are not part of this crate.

pub mod config;
pub mod load_order;
pub mod locator;
pub mod logging;
pub mod paths;

pub use load_order::{LoadOrderManager, LogicMod};
