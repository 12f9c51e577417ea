#![no_std]

pub mod clock;
pub mod pad;
pub mod strip;
