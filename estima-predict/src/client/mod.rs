pub mod openai;

pub use openai::OpenAiPredictor;
