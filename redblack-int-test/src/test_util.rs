use parking_lot::RwLock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use redblack::{NaturalOrder, RedBlackTree, TreeConfig, TreeResult};
use std::backtrace::Backtrace;
use std::env;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

/// Environment variable that pins the workload seed, for replaying a failure.
pub const SEED_ENV: &str = "REDBLACK_TEST_SEED";

pub type TestTree = RedBlackTree<i64, String, NaturalOrder>;
pub type SharedTree = Arc<RwLock<TestTree>>;

/// Runs a test between a setup and a teardown step.
///
/// `after` runs even when the test body fails. A failure panics with the
/// workload seed so the run can be replayed through [`SEED_ENV`].
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> TreeResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    B: Fn() -> TreeResult<TestContext> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    A: Fn(TestContext) -> TreeResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    let start_time = Instant::now();
    let ctx = match before() {
        Ok(ctx) => ctx,
        Err(e) => panic!("Before run failed: {:?}", e),
    };
    let seed = ctx.seed();

    // The shared lock is not unwind safe; the context is only read after a
    // panic to clear it.
    let test_ctx = ctx.clone();
    let result = std::panic::catch_unwind(AssertUnwindSafe(move || test(test_ctx)));
    let after_result = after(ctx);
    let elapsed = start_time.elapsed();

    let failure = match result {
        Ok(Ok(_)) => match after_result {
            Ok(_) => return,
            Err(e) => format!("After run failed: {:?}", e),
        },
        Ok(Err(e)) => format!("Test failed: {:?}", e),
        Err(panic_err) => {
            if let Some(s) = panic_err.downcast_ref::<&str>() {
                format!("Panic: {}", s)
            } else if let Some(s) = panic_err.downcast_ref::<String>() {
                format!("Panic: {}", s)
            } else {
                "Panic: unknown payload".to_string()
            }
        }
    };

    eprintln!("\n==================== TEST FAILED ====================");
    eprintln!("Failed after {:?}", elapsed);
    eprintln!("Error: {}", failure);
    eprintln!("Replay with {}={}", SEED_ENV, seed);
    let backtrace = Backtrace::capture().to_string();
    if !backtrace.is_empty() && !backtrace.contains("disabled") {
        eprintln!("\nBacktrace:\n{}", backtrace);
    }
    eprintln!("=====================================================\n");

    panic!("{} (seed {})", failure, seed);
}

/// Per-test state: a tree shared behind a lock and the seed of its workload.
#[derive(Clone)]
pub struct TestContext {
    name: String,
    seed: u64,
    tree: SharedTree,
}

impl TestContext {
    pub fn new(name: String, seed: u64, tree: TestTree) -> Self {
        Self {
            name,
            seed,
            tree: Arc::new(RwLock::new(tree)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn tree(&self) -> SharedTree {
        Arc::clone(&self.tree)
    }

    /// A generator seeded from the context, so every workload is replayable.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }
}

pub fn random_name() -> String {
    format!("tree-{:08x}", rand::random::<u32>())
}

/// The pinned seed from [`SEED_ENV`], or a fresh random one.
pub fn test_seed() -> u64 {
    env::var(SEED_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(rand::random)
}

/// Builds a context whose tree re-checks every invariant after each mutation.
pub fn create_test_context() -> TreeResult<TestContext> {
    let name = random_name();
    let config = TreeConfig::new()
        .with_verify_after_mutation(true)
        .with_name(&name);
    let tree = RedBlackTree::with_config(NaturalOrder, config)?;
    let seed = test_seed();
    log::debug!("created test context {} with seed {}", name, seed);
    Ok(TestContext::new(name, seed, tree))
}

/// Builds a context whose tree skips the per-mutation check, for large workloads.
pub fn create_unchecked_test_context() -> TreeResult<TestContext> {
    let name = random_name();
    let config = TreeConfig::new().with_name(&name);
    let tree = RedBlackTree::with_config(NaturalOrder, config)?;
    Ok(TestContext::new(name, test_seed(), tree))
}

/// Verifies the tree one last time, then empties it.
pub fn cleanup(ctx: TestContext) -> TreeResult<()> {
    let tree = ctx.tree();
    let mut tree = tree.write();
    let result = tree.check_invariants();
    if let Err(e) = &result {
        log::error!("tree {} left broken by test: {}", ctx.name(), e);
    }
    tree.clear();
    result
}

/// `count` keys drawn uniformly from `[0, bound)`. Small bounds give duplicates.
pub fn random_keys(rng: &mut StdRng, count: usize, bound: i64) -> Vec<i64> {
    (0..count).map(|_| rng.gen_range(0..bound)).collect()
}

/// Value that makes each inserted pair unique, so duplicates stay distinguishable.
pub fn value_for(key: i64, serial: usize) -> String {
    format!("{}#{}", key, serial)
}

/// Sorted-vector model of the tree used to check results by linear scan.
#[derive(Debug, Default, Clone)]
pub struct ReferenceModel {
    entries: Vec<(i64, String)>,
}

impl ReferenceModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts after every entry with an equal key.
    pub fn insert(&mut self, key: i64, value: String) {
        let at = self.entries.partition_point(|(k, _)| *k <= key);
        self.entries.insert(at, (key, value));
    }

    /// Removes the exact pair the tree reported as deleted.
    pub fn remove(&mut self, key: i64, value: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|(k, v)| *k == key && v == value)
        {
            Some(at) => {
                self.entries.remove(at);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, key: i64) -> bool {
        self.entries.iter().any(|(k, _)| *k == key)
    }

    pub fn entries(&self) -> &[(i64, String)] {
        &self.entries
    }

    pub fn keys(&self) -> Vec<i64> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }

    pub fn range(&self, low: i64, high: i64) -> Vec<(i64, String)> {
        self.entries
            .iter()
            .filter(|(k, _)| low <= *k && *k <= high)
            .cloned()
            .collect()
    }

    pub fn first_greater(&self, key: i64) -> Option<i64> {
        self.entries.iter().map(|(k, _)| *k).find(|k| *k > key)
    }

    pub fn first_at_least(&self, key: i64) -> Option<i64> {
        self.entries.iter().map(|(k, _)| *k).find(|k| *k >= key)
    }

    pub fn last_less(&self, key: i64) -> Option<i64> {
        self.entries.iter().rev().map(|(k, _)| *k).find(|k| *k < key)
    }

    pub fn last_at_most(&self, key: i64) -> Option<i64> {
        self.entries.iter().rev().map(|(k, _)| *k).find(|k| *k <= key)
    }
}

/// Owned copy of the tree's pairs in ascending order.
pub fn snapshot(tree: &TestTree) -> Vec<(i64, String)> {
    tree.iter().map(|(k, v)| (*k, v.clone())).collect()
}
