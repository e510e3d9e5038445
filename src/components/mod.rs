//! UI components for the board screen.

pub mod add_board_modal;
pub mod board_screen;
pub mod edit_board_modal;
pub mod share_modal;
pub mod sidebar;
pub mod thumbnail_card;
pub mod thumbnail_form;
pub mod thumbnail_grid;
pub mod toast;
