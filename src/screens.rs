pub mod input_screen;
pub mod profile_screen;
