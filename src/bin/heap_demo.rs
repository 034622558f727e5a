// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use clap::Parser;
use env_logger::Env;
use fixed_heap::{FixedHeap, Order};
use std::error::Error;

/// Fills a fixed-capacity heap, then drains it and prints one value per line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 100)]
    capacity: usize,

    /// Keep the greatest value at the top instead of the smallest
    #[arg(long)]
    max_top: bool,

    #[arg(default_values_t = [1, 1, 3, 2, 5, 4, 67, 7], allow_negative_numbers = true)]
    values: Vec<i32>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let order = if cli.max_top { Order::MaxTop } else { Order::MinTop };
    let mut heap = FixedHeap::with_order(cli.capacity, order)?;
    for value in cli.values {
        heap.insert(value)?;
    }
    while heap.size() > 0 {
        println!("{}", heap.extract()?);
    }
    Ok(())
}
