pub mod resource;
pub mod no_content;

pub use resource::resource_handler;
pub use no_content::no_content_handler;
