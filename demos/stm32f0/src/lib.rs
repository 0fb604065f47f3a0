#![no_std]

pub mod button;
pub mod systick;
