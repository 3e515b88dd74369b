use crate::interactive_ratatui::domain::models::PageRequest;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    FetchPage(PageRequest),
    ScheduleClearMessage(u64), // delay in milliseconds
}
