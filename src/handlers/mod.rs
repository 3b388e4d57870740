pub mod status_handlers;
pub mod tutorial_handlers;

pub use status_handlers::{ping_handler, version_handler};
pub use tutorial_handlers::{
    create_tutorial_handler, delete_all_tutorials_handler, delete_tutorial_handler,
    get_tutorial_handler, list_published_handler, list_tutorials_handler,
    update_tutorial_handler,
};
