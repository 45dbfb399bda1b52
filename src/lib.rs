pub mod cli;
pub mod config;
pub mod corpus;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod metadata;
pub mod project;
pub mod report;
pub mod rules;
pub mod scanner;
pub mod stats;
pub mod versions;
