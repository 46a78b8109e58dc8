//! Building blocks shared by the admin screens: Pico.css wrappers, table
//! cells, dialogs and the search bar.
pub mod alert_modal;
pub mod approval_modal;
pub mod deposit_cells;
pub mod empty_state;
pub mod pico;
pub mod search_bar;
