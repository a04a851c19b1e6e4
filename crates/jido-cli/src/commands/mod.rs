pub mod hex;
pub mod pipeline;
pub mod util;
