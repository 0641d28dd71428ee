use datelevel::{OverlayCommit, Series, VerifyMode};
use datelevel_mock::dates::{DEC31_2022, JAN1_2022, JUN30_2022, MAR1_2022, MAR31_2022, MAY1_2022};
use datelevel_mock::{MockStore, SpreadSpec, monthly_series};
use rust_decimal::Decimal;
use tracing_subscriber::fmt::format::FmtSpan;

fn print(title: &str, series: &Series<SpreadSpec>, market: i32) {
    println!("{title}");
    for e in series.series_for(&market) {
        println!("  #{:<3} {} ..= {}  {}", e.id, e.start, e.end, e.value);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug, and run with --features tracing
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    // 1. Load a year of monthly spreads for market 1 and normalize them.
    let mut spreads = Series::builder()
        .entries(monthly_series(1, JAN1_2022, DEC31_2022, 100))
        .normalize_on_build(true)
        .commit(OverlayCommit::Atomic)
        .verify_after_write(VerifyMode::Strict)
        .build()?;
    print("loaded", &spreads, 1);

    // 2. Override March.
    spreads.set(SpreadSpec::new(1, MAR1_2022, MAR31_2022, 150))?;
    print("after overlay", &spreads, 1);

    // 3. Widen every spread in effect between May and June.
    spreads.update(&1, MAY1_2022, JUN30_2022, |e| e.value += Decimal::TEN)?;
    print("after range update", &spreads, 1);

    // 4. A disjoint overlay is rejected and the series stays as it was.
    let mut market2 = Series::builder()
        .entry(SpreadSpec::new(2, JAN1_2022, MAR31_2022, 1))
        .commit(OverlayCommit::Atomic)
        .build()?;
    if let Err(e) = market2.set(SpreadSpec::new(2, MAY1_2022, JUN30_2022, 2)) {
        println!("rejected: {e}");
    }
    print("market 2", &market2, 2);

    // 5. Persist through a store that deletes merged rows by id.
    let mut store = MockStore::with_rows(spreads.into_entries());
    store.insert(SpreadSpec::open_ended(1, JUN30_2022, 100));
    let removed = store.rebuild();
    println!("store rebuild removed {removed} row(s): {:?}", store.deleted_ids().collect::<Vec<_>>());

    Ok(())
}
