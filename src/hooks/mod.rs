pub mod use_active_section;

pub use use_active_section::use_active_section;
