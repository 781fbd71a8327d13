// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (banner, controls, content, status, legend)
// - render: Main orchestration function that coordinates all rendering
// - banner: Renders the informational note at the top
// - search: Renders the locale box and the search input with match count
// - asset_grid: Renders the card grid and the loading skeleton
// - dialogs: Renders the locale picker popup and error/empty panels
// - status_bar: Renders the pagination bar with cursor details
// - legend: Renders hotkey legend
// - toast: Renders toast notifications (brief pop-up messages)

pub mod asset_grid;
pub mod banner;
pub mod dialogs;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
