// Declare submodules
mod analysis;
mod common;

pub use analysis::{analysis_prompt, comparative_analysis_prompt, single_analysis_prompt};
