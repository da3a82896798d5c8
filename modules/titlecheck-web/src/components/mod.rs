pub mod layout;
pub mod verify;

pub use verify::render_verify_page;
