//! Rule-based gender prediction for personal names common in the Indian
//! subcontinent, with mixed Latin/Devanagari honorific handling.

pub mod config;
pub mod error;
pub mod predictor;
pub mod telemetry;
