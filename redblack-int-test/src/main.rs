use rand::Rng;
use redblack::TreeResult;
use redblack_int_test::test_util::{cleanup, create_unchecked_test_context, value_for};
use std::time::Instant;

fn main() -> TreeResult<()> {
    env_logger::init();
    println!("Starting stress test...");
    let ctx = create_unchecked_test_context()?;
    println!("Seed {}", ctx.seed());

    let count: usize = 1_000_000;
    let mut rng = ctx.rng();
    let tree = ctx.tree();

    let start = Instant::now();
    {
        let mut tree = tree.write();
        for serial in 0..count {
            let key = rng.gen_range(0..(count as i64 / 2));
            tree.insert(key, value_for(key, serial));
        }
    }
    println!("Inserted {} entries in {:?}", count, start.elapsed());

    let start = Instant::now();
    let hits = {
        let tree = tree.read();
        (0..count)
            .filter(|_| tree.contains_key(&rng.gen_range(0..(count as i64))))
            .count()
    };
    println!("Ran {} lookups ({} hits) in {:?}", count, hits, start.elapsed());

    let start = Instant::now();
    let matched = {
        let tree = tree.read();
        let mut matched = 0usize;
        for low in (0..(count as i64 / 2)).step_by(1_000) {
            tree.range_query(|_, _| matched += 1, &low, &(low + 99));
        }
        matched
    };
    println!("Range scans matched {} entries in {:?}", matched, start.elapsed());

    let start = Instant::now();
    let removed = {
        let mut tree = tree.write();
        (0..count / 2)
            .filter(|_| tree.delete(&rng.gen_range(0..(count as i64 / 2))).is_some())
            .count()
    };
    println!("Deleted {} entries in {:?}", removed, start.elapsed());

    let start = Instant::now();
    let black_height = tree.read().validate()?;
    println!("{:?}", tree.read().stats());
    println!("Validated black height {} in {:?}", black_height, start.elapsed());

    cleanup(ctx)
}
