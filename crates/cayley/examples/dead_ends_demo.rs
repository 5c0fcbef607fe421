//! Dead-end probe on two small wreath products.
//!
//! Purpose
//! - `Z/2 wr Z` at `R = 7`: one dead end, escaped by `t t t`.
//! - `Z/2 wr Z/3` at `R = 6`: the group is exhausted at radius 6, so its single
//!   dead end has no escape at any depth and is reported as censored.
//!
//! Run with `cargo run -p cayley --example dead_ends_demo`.

use std::time::Instant;

use cayley::api::{find_dead_ends, Algebra, Cyclic, DeadEndCfg, IntegerLine, Wreath};

fn probe<A: Algebra>(algebra: &A, cfg: DeadEndCfg) {
    let start = Instant::now();
    let (ball, report) = find_dead_ends(algebra, &algebra.default_generators(), cfg)
        .expect("dead-end scan should accept the demo configuration");
    let elapsed = start.elapsed().as_secs_f64() * 1e3;
    println!("== {} ==", algebra.label());
    print!("{}", report.render(cfg.max_examples));
    println!(
        "(ball of {} states to radius {}, {elapsed:.1} ms)\n",
        ball.len(),
        ball.radius()
    );
}

fn main() {
    let lamp = Cyclic::new(2).expect("Z/2");
    probe(
        &Wreath::new(lamp, IntegerLine),
        DeadEndCfg::new(7, 6),
    );
    probe(
        &Wreath::new(lamp, Cyclic::new(3).expect("Z/3")),
        DeadEndCfg::new(6, 5),
    );
}
