pub use self::{location::*, photo::*, title_filter::*};

pub(crate) mod location;
pub(crate) mod photo;
pub(crate) mod title_filter;
