pub mod counter_display;
pub mod increment_button;
pub mod instructions;
pub mod logo;
