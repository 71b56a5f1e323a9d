mod calendar_grid;
mod calendar_header;
mod day_cell;
mod filters_panel;
mod swatch_style;
mod task_chip;
mod task_modal;
mod weekday_header;

pub use calendar_grid::CalendarGrid;
pub use calendar_header::CalendarHeader;
pub use filters_panel::FiltersPanel;
pub use task_modal::TaskModal;
pub use weekday_header::WeekdayHeader;
