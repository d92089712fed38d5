
#[allow(unused_imports)]
pub use mocks::*;
