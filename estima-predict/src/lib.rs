//! # estima-predict
//!
//! AI weight generation. Turns requirement text into a dense weight
//! vector over the 13-type element catalog via an external
//! chat-completion predictor, applying the subset selection and
//! zeroing rules. A failed prediction fails the whole call — the
//! adapter never disguises a zero-filled vector as a real prediction.

pub mod adapter;
pub mod client;

pub use adapter::WeightPredictionAdapter;
pub use client::openai::{OpenAiPredictor, API_KEY_ENV};
