mod ui;
mod view_state;
