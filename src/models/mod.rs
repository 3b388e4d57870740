pub mod tutorial;

pub use tutorial::{Tutorial, TutorialQuery, TutorialRequest};
