pub mod extract;

pub use extract::{IdPath, TriviaJson, TriviaQuery};
