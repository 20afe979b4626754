//! Example: Driving one execution scope by hand
//!
//! This example walks a scope through the sequence a host engine performs:
//! prepare, a handful of row calls, then close. Lifecycle milestones and
//! fault reports land on stderr through `tracing`.
//!
//! Run with:
//! ```bash
//! RUST_LOG=debug cargo run --example scope_walkthrough -p rowmask-udf
//! ```

use rowmask_core::PatternCatalog;
use rowmask_udf::{close_scope, mask, mask_with_char, prepare_scope, scope_stats, ScopeContext};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("Scope Walkthrough Example");
    println!("=========================\n");

    let context = ScopeContext::new();
    println!("Scope id: {}\n", context.scope_id());

    // Example 1: A call before preparation fails and reports a fault
    println!("Calling before prepare:");
    let masked = mask(&context, Some("SSN"), Some("id 123456-1234567"));
    println!("  result: {:?}", masked);
    println!("  diagnostics so far: {}\n", context.diagnostics().len());

    // Example 2: Prepare, then mask rows with the built-in keys
    prepare_scope(&context);
    let catalog = PatternCatalog::builtin();
    let mut keys: Vec<_> = catalog.keys().collect();
    keys.sort_unstable();
    println!("Scope prepared (keys: {}), masking rows:", keys.join(", "));

    let rows = [
        ("SSN", "my ssn is 123456-1234567 thanks"),
        ("EMAIL", "contact: a.b@example.com now"),
        ("APN", "codes 1234 5678"),
    ];
    for (key, row) in rows {
        match mask(&context, Some(key), Some(row)) {
            Some(masked) => println!("  ✓ {:<6} {:?} -> {:?}", key, row, masked),
            None => println!("  ✗ {:<6} {:?} -> null", key, row),
        }
    }
    println!();

    // Example 3: A caller-chosen replacement character
    println!("Replacement character:");
    let masked =
        mask_with_char(&context, Some("EMAIL"), Some("bug reports: qa@example.com"), Some("#"));
    println!("  {:?}\n", masked);

    // Example 4: Silent outcomes yield null without touching the channel
    println!("Silent outcomes:");
    println!("  unknown key -> {:?}", mask(&context, Some("PHONE"), Some("call 12345")));
    println!("  null input  -> {:?}", mask(&context, Some("SSN"), None));
    println!("  diagnostics still: {}\n", context.diagnostics().len());

    // Example 5: Cache counters and teardown
    if let Some(stats) = scope_stats(&context) {
        println!("Cache counters before close:");
        println!("  compiled patterns: {}", stats.size);
        println!("  hits: {} misses: {}", stats.hits, stats.misses);
        println!("  hit rate: {:.2}", stats.hit_rate());
    }

    close_scope(&context);
    println!("\nScope closed; final status: {}", context.status());
}
