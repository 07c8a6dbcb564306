use std::rc::Rc;

use clap::Parser;
use log::info;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use polyzdd::monomial::Monomial;
use polyzdd::ring::Ring;
use polyzdd::zdd::Zdd;

#[derive(Debug, Parser)]
#[command(author, version)]
struct Cli {
    /// Number of ring variables.
    #[arg(long, value_name = "INT", default_value = "6")]
    vars: usize,

    /// Number of random monomials per polynomial.
    #[arg(long, value_name = "INT", default_value = "5")]
    terms: usize,

    /// Seed for the random generator.
    #[arg(long, value_name = "INT", default_value = "42")]
    seed: u64,

    /// Print the product diagram in DOT format.
    #[arg(long)]
    dot: bool,
}

fn random_polynomial(ring: &Rc<Ring>, rng: &mut ChaCha8Rng, num_terms: usize) -> Zdd {
    let monomials: Vec<Monomial> = (0..num_terms)
        .map(|_| ring.monomial((0..ring.size()).filter(|_| rng.random_bool(0.3))))
        .collect();
    Zdd::from_monomials(ring, &monomials)
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let args = Cli::parse();
    println!("args = {:?}", args);

    let ring = Rc::new(Ring::with_size(args.vars));
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let f = random_polynomial(&ring, &mut rng, args.terms);
    let g = random_polynomial(&ring, &mut rng, args.terms);
    println!("f = {}", f);
    println!("g = {}", g);

    let sum = &f + &g;
    println!("f + g = {}", sum);

    let time_mul = std::time::Instant::now();
    let product = &f * &g;
    info!("f * g computed in {:.3} s", time_mul.elapsed().as_secs_f64());
    println!("f * g = {}", product);
    println!("lm(f * g) = {}", product.leading_monomial());
    println!(
        "monomials = {}, degree = {}, nodes = {}, table = {}",
        product.count(),
        product.degree(),
        product.node_count(),
        product.table_size()
    );

    if args.dot {
        println!("{}", product.to_dot()?);
    }

    println!("\nAll done in {:.3} s", time_total.elapsed().as_secs_f64());
    Ok(())
}
