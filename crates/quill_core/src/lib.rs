//! Quill Core
//!
//! This crate provides the host-agnostic primitives Quill widgets are built on:
//!
//! - **Event Model**: Interaction events and their payloads
//! - **Listener Handles**: Registration returns an id that teardown hands back
//! - **State Machines**: Flat statecharts for widget interaction states
//!
//! # Example
//!
//! ```rust
//! use quill_core::fsm::StateMachine;
//!
//! const IDLE: u32 = 0;
//! const ACTIVE: u32 = 1;
//! const TOGGLE: u32 = 1;
//!
//! let mut fsm = StateMachine::builder(IDLE)
//!     .on(IDLE, TOGGLE, ACTIVE)
//!     .on(ACTIVE, TOGGLE, IDLE)
//!     .build();
//!
//! assert_eq!(fsm.send(TOGGLE), Some(ACTIVE));
//! ```

pub mod events;
pub mod fsm;
pub mod listeners;

pub use events::{event_types, Event, EventData, EventType, KeyCode};
pub use fsm::{EventId, StateId, StateMachine, StateMachineBuilder, Transition};
pub use listeners::{Listener, ListenerId, ListenerRegistry, Subscriptions};
