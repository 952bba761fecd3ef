mod history_vm;
mod palette;
mod results_vm;
mod time_fmt;

pub use history_vm::{HistoryCardVm, difficulty_class, map_history_cards};
pub use palette::{PaletteState, palette_class, palette_states};
pub use results_vm::{format_score, score_class, score_message};
pub use time_fmt::format_date;
