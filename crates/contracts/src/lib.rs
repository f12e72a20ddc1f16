//! Wire types shared by the backend and the console, plus the client-side
//! order workflows (pending selection, placed-order browsing, receipt).

pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
