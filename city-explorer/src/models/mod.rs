mod event;
mod location;
mod movie;
mod weather;

pub use event::*;
pub use location::*;
pub use movie::*;
pub use weather::*;
