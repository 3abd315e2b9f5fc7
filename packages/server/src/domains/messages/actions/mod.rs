mod open_room;
mod send_message;

pub use open_room::open_room;
pub use send_message::send_message;
