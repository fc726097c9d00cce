//! Built-in rule data.
//!
//! Rule order is priority: more specific signatures (derivative browsers that
//! also advertise `Chrome/` or `Safari/`) must come before the generic ones.

pub(crate) mod browsers;
pub(crate) mod engines;
pub(crate) mod tables;
