//! Application layer - Use cases and the ports they depend on
//!
//! - Services: the rules engine and the character aggregate root
//! - Ports: outbound interfaces for randomness and slot storage
//! - DTOs: printable views handed to drivers

pub mod dto;
pub mod ports;
pub mod services;
