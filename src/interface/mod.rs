pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_drinks_csv;
pub use prompts::{prompt_drink, prompt_mood, prompt_yes_no};
pub use render::{
    display_comparison, display_criteria, display_drink_detail, display_drink_list,
    display_stats,
};
