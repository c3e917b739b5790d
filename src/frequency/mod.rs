// Word frequency statistics: background rates, corpus distribution, and the
// comparative ranking between them.

pub mod background;
pub mod distribution;
pub mod ranking;
