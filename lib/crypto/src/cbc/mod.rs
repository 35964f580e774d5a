mod dec;
pub use dec::decrypt;
