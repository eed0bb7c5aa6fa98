pub mod display;
#[cfg(feature = "wasm-js")]
pub(crate) mod dom;
pub(crate) mod sleep;
#[cfg(test)]
pub(crate) mod testing;
