pub mod about;
pub mod animated_value;
pub mod carousel_widget;
pub mod case_studies;
pub mod contact_form;
pub mod floating_buttons;
pub mod hero;
pub mod methodology;
pub mod navbar;
pub mod notification_stack;
pub mod reveal;
pub mod ripple_button;
pub mod team;
