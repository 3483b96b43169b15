pub mod gemini;
pub mod generator;

pub use generator::ContentGenerator;
