#![allow(dead_code)]

pub mod generator;
pub mod pdf_extractor;
pub mod token_counter;
