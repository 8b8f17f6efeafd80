mod dashboard_vm;
mod history_vm;
mod option_vm;
mod time_fmt;

pub use dashboard_vm::{DashboardEntryVm, dashboard_entries};
pub use history_vm::{HistoryItemVm, HistoryTabVm, history_tabs, map_history_items};
pub use option_vm::{OptionVm, map_options, option_class, verdict_text};
