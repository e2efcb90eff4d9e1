use anyhow::{Context, Result, anyhow};
use dynarray::cli::Cli;
use dynarray::DynamicArray;
use log::info;
use rand::Rng;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(&cli);

    run_demo(cli.fill).context("Demo sequence failed")?;

    if let Some(n) = cli.random {
        println!("--- Sorting {} random integers ---", n);
        run_random_sort(n).with_context(|| format!("Random sort of {} elements failed", n))?;
    }

    Ok(())
}

fn init_logger(cli: &Cli) {
    let mut builder = pretty_env_logger::formatted_timed_builder();
    builder.filter_level(cli.log_level());
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn run_demo(fill: usize) -> Result<()> {
    let mut list = DynamicArray::new();
    for i in 0..fill {
        list.append(i as i64);
    }
    info!("appended {} elements, capacity {}", list.size(), list.capacity());

    let inserts: [(usize, i64); 8] = [
        (0, 20),
        (5, 200),
        (7, 2000),
        (3, 20001),
        (4, 20002),
        (2, 20003),
        (8, 20004),
        (11, 20005),
    ];
    for (index, value) in inserts {
        list.insert_at(index, value)
            .with_context(|| format!("Failed to insert {} at {}", value, index))?;
    }

    list.sort(|a, b| a.cmp(b));
    info!("sorted {} elements", list.size());

    for index in [11, 1, 10, 14, 8] {
        list.remove_at(index)
            .with_context(|| format!("Failed to remove at {}", index))?;
    }

    println!("{}", list);
    println!("{}", list.size());
    println!("{}", list.get(2).context("Failed to read index 2")?);
    // -1 marks "not found" in the printed report.
    match list.index_of(&20000) {
        Some(i) => println!("{}", i),
        None => println!("-1"),
    }

    Ok(())
}

fn run_random_sort(n: usize) -> Result<()> {
    let mut rng = rand::rng();
    let mut list = DynamicArray::new();
    for _ in 0..n {
        list.append(rng.random::<i32>());
    }

    list.sort(|a, b| a.cmp(b));

    for i in 1..list.size() {
        if list.get(i - 1)? > list.get(i)? {
            return Err(anyhow!("Elements {} and {} are out of order", i - 1, i));
        }
    }
    println!("{} elements sorted", list.size());
    Ok(())
}
