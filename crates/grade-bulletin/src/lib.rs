//! Grade bulletin approval toolkit.
//!
//! Classifies raw grade-form input, evaluates whether a student passes a
//! subject, and renders the result with a caller-supplied message catalog.

pub mod approval;
pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod presentation;
pub mod review;
pub mod telemetry;

pub use approval::{evaluate, ApprovalStatus, RejectionReason};
pub use fields::{AbsenceCount, Grade, Observation};
pub use form::{FormUpdate, GradeEntryForm};
pub use presentation::{StatusMessages, StatusPanel, StatusTone};
