/// proxy file for when no_std support is enabled. Simply defines aliases for std modules so we don't need to
/// deal with different names elsewhere

pub mod boxed {
    pub use alloc::boxed::Box;
}

pub mod collections {
    pub use hashbrown::HashSet;
}

pub mod fmt {
    pub use core::fmt::{Debug, Display, Formatter, Result};
}

pub mod vec {
    pub use alloc::vec::Vec;
}

pub mod string {
    pub use alloc::string::String;
}
