#![forbid(unsafe_code)]

pub mod http;
pub mod remote;

pub use http::{ApiConfig, ApiConfigError, HttpApi};
pub use remote::{
    ConceptService, InMemoryBackend, QuestionCallCounts, QuestionService, Remote, RemoteError,
    StatsService,
};
