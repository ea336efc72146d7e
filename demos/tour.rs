//! Builds a tree out of random keys, knocks it off balance and rebuilds it, printing its shape along the way.
//!
//! Run with `cargo run --example tour --features rand`. Set `RUST_LOG=ashtree=trace` to see the tree's own events; an optional first argument seeds the random source.

use ashtree::{random::random_keys, SearchTree};
use rand::SeedableRng;
use rand_pcg::Pcg64;
use std::env;
use tracing_subscriber::EnvFilter;

fn print_orders(tree: &SearchTree<u32>) {
    println!("Level order: {:?}", tree.level_order_keys());
    let mut keys = Vec::with_capacity(tree.len());
    tree.pre_order(|node| keys.push(*node.key()));
    println!("Pre-order: {:?}", keys);
    keys.clear();
    tree.post_order(|node| keys.push(*node.key()));
    println!("Post-order: {:?}", keys);
    keys.clear();
    tree.in_order(|node| keys.push(*node.key()));
    println!("In-order: {:?}", keys);
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(0x5eed);
    let mut rng = Pcg64::seed_from_u64(seed);

    let keys = random_keys(&mut rng, 15, 100_u32);
    println!("Random keys: {:?}", keys);
    let mut tree = SearchTree::<u32>::from_keys(keys);
    println!("Is the tree balanced? {}", tree.is_balanced());
    print_orders(&tree);

    for key in [150, 120, 110] {
        tree.insert(key);
    }
    println!("\nIs the tree balanced after adding keys above 100? {}", tree.is_balanced());
    print!("{}", tree.pretty());

    tree.rebalance();
    println!("\nIs the tree balanced after rebalancing? {}", tree.is_balanced());
    print_orders(&tree);
    print!("{}", tree.pretty());
}
