//! Object store domain: keys, metadata and locators.

mod key;
mod locator;
mod meta;

pub use key::ObjectKey;
pub use locator::StoreLocator;
pub use meta::ObjectMeta;
