pub mod form;
pub mod layout;
pub mod listing;
pub mod show;

pub use form::{CheckboxField, FieldErrors, GenreSelect, StateSelect, TextField};
pub use layout::{FlashList, Layout, Navbar};
pub use listing::{SearchForm, SummaryList};
pub use show::ShowList;
