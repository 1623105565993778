#![allow(dead_code)]

use faultline::Vacancy;

#[derive(Vacancy)]
enum Level {
    #[vacant]
    Unset,
    #[vacant]
    Off,
    On,
}

fn main() {}
