mod cards;
mod dashboard;
mod fill_blank;
mod frame;
mod history;
mod multiple_choice;
mod narration;
mod quiz;
mod reading;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use cards::CardsView;
pub use dashboard::DashboardView;
pub use fill_blank::FillBlankView;
pub use history::HistoryView;
pub use multiple_choice::MultipleChoiceView;
pub use reading::ReadingView;
