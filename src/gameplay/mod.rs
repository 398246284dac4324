pub mod action;
pub use action::*;

pub mod result;
pub use result::*;

pub mod seat;
pub use seat::*;

pub mod status;
pub use status::*;

pub mod table;
pub use table::*;
