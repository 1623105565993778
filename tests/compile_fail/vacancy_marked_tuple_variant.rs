#![allow(dead_code)]

use faultline::Vacancy;

#[derive(Vacancy)]
enum Reading {
    #[vacant]
    Missing(u8),
    Present(u8),
}

fn main() {}
