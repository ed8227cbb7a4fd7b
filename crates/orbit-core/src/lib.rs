pub mod cards;
pub mod constants;
pub mod drag;
pub mod feed;
pub mod orbit;
pub mod photo;
pub mod session;
pub mod viewer;

pub use cards::*;
pub use drag::*;
pub use feed::*;
pub use orbit::*;
pub use photo::*;
pub use session::*;
pub use viewer::*;
