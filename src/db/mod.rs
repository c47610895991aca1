// SPDX-License-Identifier: MIT

//! Storage layer (in-memory).

pub mod memory;

pub use memory::ActivityStore;
