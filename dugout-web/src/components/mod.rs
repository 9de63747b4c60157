pub mod assignment_grid;
pub mod card;
pub mod filter_bar;
pub mod footer;
pub mod games_table;
pub mod header;
pub mod pivot_table;
pub mod positions_panel;
pub mod roster_panel;
pub mod summary_tables;
