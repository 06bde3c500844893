pub mod icons;
pub mod output;
pub mod table;
pub mod theme;

pub use icons::Icons;
pub use output::{clear_screen, error, header, menu_item, prompt, rule, success, warn};
pub use table::{habit_table, HabitRow};
pub use theme::{theme, Theme};
