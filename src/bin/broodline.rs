//! Broodline CLI — herd keeper's console
//!
//! Commands:
//!   broodline mint       — mint founder individuals
//!   broodline breed      — breed mate pairs (pseudo-random fertilisation)
//!   broodline breed-sure — breed one pair with both mates fertilised
//!   broodline rel        — kinship of one individual to another
//!   broodline show       — show one individual
//!   broodline list       — list the whole herd
//!   broodline stats      — herd statistics
//!   broodline demo       — build and walk a three-family demo herd

use broodline::{
    relationship_between, BreedOutcome, BreedingEngine, Conception, HerdFile, IndividualId,
    OwnerAccess, OwnerId, Registry, SystemClock,
};
use std::env;

const HERD_FILE: &str = "broodline-herd.json";
const KEEPER: &str = "keeper";

fn print_usage() {
    println!(
        r#"
Broodline — generational creature registry

Usage: broodline <command> [options]

Commands:
  mint  <count>                 Mint <count> founder individuals
  breed <idA> <idB> [more...]   Breed pairs (even number of ids, paired in order)
  breed-sure <idA> <idB>        Breed one pair, both mates fertilised
  rel   <idOf> <idTo>           Relationship of <idOf> to <idTo>
  show  <id>                    Show one individual
  list                          List the whole herd
  stats                         Herd statistics
  demo                          Build a three-family demo herd and query it

Examples:
  broodline mint 5
  broodline breed 0 1
  broodline breed 0 1 2 3
  broodline breed-sure 0 1
  broodline rel 0 5
"#
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "mint" => cmd_mint(&args[2..]),
        "breed" => cmd_breed(&args[2..], false),
        "breed-sure" => cmd_breed(&args[2..], true),
        "rel" => cmd_rel(&args[2..]),
        "show" => cmd_show(&args[2..]),
        "list" => cmd_list(),
        "stats" => cmd_stats(),
        "demo" => cmd_demo(),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage();
        }
    }
}

fn engine() -> BreedingEngine<OwnerAccess, SystemClock> {
    BreedingEngine::new(OwnerAccess::new(), SystemClock)
}

fn keeper() -> OwnerId {
    OwnerId::from(KEEPER)
}

fn load_herd() -> HerdFile {
    let herd = HerdFile::open(HERD_FILE, KEEPER);
    println!(
        "  Loaded {} individual(s) from {}",
        herd.registry.total_count(),
        HERD_FILE
    );
    herd
}

fn save_herd(herd: &HerdFile) {
    if let Err(e) = herd.save() {
        eprintln!("  Failed to save: {}", e);
    } else {
        println!("  Saved to {}", HERD_FILE);
    }
}

fn parse_ids(args: &[String]) -> Option<Vec<IndividualId>> {
    args.iter()
        .map(|s| s.parse().ok().map(IndividualId))
        .collect()
}

fn print_outcome(registry: &Registry, outcome: &BreedOutcome) {
    for mating in &outcome.matings {
        println!(
            "  Mated {} x {} | A fertilised: {} | B fertilised: {}",
            mating.mate_a, mating.mate_b, mating.mate_a_fertilised, mating.mate_b_fertilised
        );
    }
    match &outcome.births {
        Some(births) => {
            for id in &births.baby_ids {
                if let Ok(baby) = registry.get(*id) {
                    println!(
                        "  Born {} | gen {} | mum {} dad {}",
                        id,
                        baby.age.generation,
                        baby.mum_id.map(|i| i.to_string()).unwrap_or("?".into()),
                        baby.dad_id.map(|i| i.to_string()).unwrap_or("?".into()),
                    );
                }
            }
        }
        None => println!("  No newborns this time."),
    }
}

fn cmd_mint(args: &[String]) {
    let count: usize = match args.first().and_then(|s| s.parse().ok()) {
        Some(n) if n > 0 => n,
        _ => {
            eprintln!("Usage: broodline mint <count>");
            return;
        }
    };

    let mut herd = load_herd();
    match engine().mint_to(
        &mut herd.registry,
        &keeper(),
        &vec![Conception::founder(); count],
    ) {
        Ok(ids) => {
            println!(
                "  Minted {} founder(s): {} .. {}",
                ids.len(),
                ids[0],
                ids[ids.len() - 1]
            );
            save_herd(&herd);
        }
        Err(e) => eprintln!("  Mint failed: {}", e),
    }
}

fn cmd_breed(args: &[String], both_fertilised: bool) {
    let Some(ids) = parse_ids(args) else {
        eprintln!("  Ids must be numbers");
        return;
    };
    if ids.is_empty() || ids.len() % 2 != 0 || (both_fertilised && ids.len() != 2) {
        eprintln!("Usage: broodline breed <idA> <idB> [more pairs...] | breed-sure <idA> <idB>");
        return;
    }

    let mut herd = load_herd();
    let engine = engine();
    let (mate_as, mate_bs): (Vec<_>, Vec<_>) = ids.chunks(2).map(|p| (p[0], p[1])).unzip();
    let result = if both_fertilised {
        engine.breed_both_mates_fertilised(&mut herd.registry, &keeper(), mate_as[0], mate_bs[0])
    } else {
        engine.breed_pairs(&mut herd.registry, &keeper(), &mate_as, &mate_bs)
    };

    match result {
        Ok(outcome) => {
            print_outcome(&herd.registry, &outcome);
            herd.metadata.breed_calls += 1;
            save_herd(&herd);
        }
        Err(e) => eprintln!("  Breed failed: {}", e),
    }
}

fn cmd_rel(args: &[String]) {
    let Some(ids) = parse_ids(args) else {
        eprintln!("  Ids must be numbers");
        return;
    };
    if ids.len() != 2 {
        eprintln!("Usage: broodline rel <idOf> <idTo>");
        return;
    }

    let herd = load_herd();
    match relationship_between(&herd.registry, ids[0], ids[1]) {
        Ok(rel) => println!("  {} is {:?} to {}", ids[0], rel, ids[1]),
        Err(e) => eprintln!("  Query failed: {}", e),
    }
}

fn cmd_show(args: &[String]) {
    let Some(ids) = parse_ids(args) else {
        eprintln!("  Ids must be numbers");
        return;
    };
    let Some(&id) = ids.first() else {
        eprintln!("Usage: broodline show <id>");
        return;
    };

    let herd = load_herd();
    match herd.registry.get(id) {
        Ok(ind) => match serde_json::to_string_pretty(ind) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("  Serialize failed: {}", e),
        },
        Err(e) => eprintln!("  {}", e),
    }
}

fn cmd_list() {
    let herd = load_herd();
    if herd.registry.total_count() == 0 {
        println!("\n  Empty herd. Use 'broodline mint' or 'broodline demo' to get started.");
        return;
    }
    println!("  {}", "-".repeat(64));
    for ind in herd.registry.iter() {
        println!(
            "  {:>6} | gen {:>3} | mum {:>6} | dad {:>6} | {}",
            ind.id.to_string(),
            ind.age.generation,
            ind.mum_id.map(|i| i.to_string()).unwrap_or("-".into()),
            ind.dad_id.map(|i| i.to_string()).unwrap_or("-".into()),
            ind.owner,
        );
    }
}

fn cmd_stats() {
    let herd = load_herd();
    println!("\n  {}", herd.summary());
}

fn cmd_demo() {
    println!("\nBroodline demo — three families, two generations down");
    println!("{}", "-".repeat(60));

    let engine = engine();
    let mut registry = Registry::new();
    let founders = engine
        .mint_to(&mut registry, &keeper(), &vec![Conception::founder(); 5])
        .expect("minting founders");
    let (a, b, c, d) = (founders[0], founders[1], founders[2], founders[3]);
    println!("  Minted founders {:?}", founders);

    let pair = |reg: &mut Registry, x, y| {
        let outcome = engine
            .breed_both_mates_fertilised(reg, &keeper(), x, y)
            .expect("breeding demo pair");
        let ids = outcome.births.expect("both fertilised").baby_ids;
        (ids[0], ids[1])
    };

    let (f, g) = pair(&mut registry, a, b);
    let (h, i) = pair(&mut registry, c, d);
    let (j, _k) = pair(&mut registry, f, h);
    let (_l, m) = pair(&mut registry, g, i);
    println!("  Bred children {f}, {g}, {h}, {i} and grandchildren down to gen 2");

    println!("\n  Sample queries:");
    for (of, to) in [(a, a), (a, b), (a, f), (f, a), (a, j), (f, g), (j, m)] {
        let rel = relationship_between(&registry, of, to).expect("demo query");
        println!("    {} -> {}: {:?}", of, to, rel);
    }

    println!("\n  A pseudo-random breed of {} x {}:", a, b);
    let outcome = engine
        .breed(&mut registry, &keeper(), a, b)
        .expect("demo breed");
    print_outcome(&registry, &outcome);
}
